use std::{
    io::{self, BufRead},
    thread,
};

use tokio::sync::mpsc;
use tracing::{debug, warn};

const LINE_BUFFER: usize = 16;

/// Reads lines on a plain OS thread and forwards them to the runtime.
/// A read that never returns only parks this thread, so the runtime can
/// still shut down while the terminal waits for input.
pub fn spawn_line_reader<R>(reader: R) -> io::Result<mpsc::Receiver<String>>
where
    R: BufRead + Send + 'static,
{
    let (line_tx, line_rx) = mpsc::channel(LINE_BUFFER);

    thread::Builder::new()
        .name("stdin-reader".to_string())
        .spawn(move || {
            for line in reader.lines() {
                match line {
                    Ok(line) => {
                        if line_tx.blocking_send(line).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        warn!("Failed to read input: {}", e);
                        break;
                    }
                }
            }
            debug!("Input reader finished");
        })?;

    Ok(line_rx)
}

#[cfg(test)]
mod tests {
    use std::{
        io::{BufReader, Cursor, Read},
        sync::mpsc as std_mpsc,
        time::{Duration, Instant},
    };

    use super::*;

    /// Blocks in `read` until the paired sender is dropped.
    struct StalledInput(std_mpsc::Receiver<()>);

    impl Read for StalledInput {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            let _ = self.0.recv();
            Ok(0)
        }
    }

    #[tokio::test]
    async fn test_lines_are_forwarded_in_order() {
        let mut lines = spawn_line_reader(Cursor::new("r\ns ETH-USDT\n")).unwrap();

        assert_eq!(lines.recv().await.as_deref(), Some("r"));
        assert_eq!(lines.recv().await.as_deref(), Some("s ETH-USDT"));
        assert_eq!(lines.recv().await, None);
    }

    #[test]
    fn test_runtime_shuts_down_while_read_is_pending() {
        let (release, stalled) = std_mpsc::channel::<()>();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .unwrap();
        let started = Instant::now();

        runtime.block_on(async {
            let mut lines = spawn_line_reader(BufReader::new(StalledInput(stalled))).unwrap();
            tokio::select! {
                line = lines.recv() => panic!("unexpected input: {:?}", line),
                _ = tokio::time::sleep(Duration::from_millis(50)) => {}
            }
        });
        drop(runtime);

        assert!(started.elapsed() < Duration::from_secs(5));
        drop(release);
    }
}
