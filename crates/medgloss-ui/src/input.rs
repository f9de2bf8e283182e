use std::io::BufRead;

use kanal::AsyncReceiver;

/// Read stdin lines on a dedicated thread.
///
/// A pending read on tokio's stdin would keep the runtime from shutting
/// down, so blocking reads stay on a plain thread that is never joined. The
/// channel closes on EOF or read error.
pub fn spawn_stdin_reader() -> AsyncReceiver<String> {
    let (tx, rx) = kanal::bounded_async(64);
    let tx = tx.to_sync();

    let spawned = std::thread::Builder::new()
        .name("stdin-reader".to_string())
        .spawn(move || {
            for line in std::io::stdin().lock().lines() {
                match line {
                    Ok(line) => {
                        if tx.send(line).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::warn!("[UI] stdin read failed: {}", e);
                        break;
                    }
                }
            }
        });

    if let Err(e) = spawned {
        tracing::error!("[UI] failed to spawn stdin reader: {}", e);
    }

    rx
}
