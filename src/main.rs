mod calc;
mod dates;
mod ipc;
mod model;
mod query;
mod seed;

use std::io::{self, BufRead, Write};
use std::path::Path;

fn main() {
    env_logger::init();

    // Optional argv[1]: a JSON fixture file replacing the built-in seed.
    let data = match std::env::args().nth(1) {
        Some(path) => match seed::load_from_file(Path::new(&path)) {
            Ok(data) => data,
            Err(e) => {
                eprintln!("failed to load dataset from {path}: {e:#}");
                std::process::exit(1);
            }
        },
        None => seed::builtin(),
    };
    log::info!(
        "serving {} students, {} attendance records, {} grade records",
        data.students.len(),
        data.attendance.len(),
        data.grades.len()
    );

    let mut state = ipc::AppState { data };

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(v) => v,
            Err(_) => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        let req: ipc::Request = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                // Can't reply with an id; report and keep the loop alive.
                log::warn!("unparseable request line: {e}");
                let _ = writeln!(
                    stdout,
                    "{{\"ok\":false,\"error\":{{\"code\":\"bad_json\",\"message\":\"{}\"}}}}",
                    e
                );
                let _ = stdout.flush();
                continue;
            }
        };

        let resp = ipc::handle_request(&mut state, req);
        let _ = writeln!(
            stdout,
            "{}",
            serde_json::to_string(&resp).unwrap_or_else(|_| "{\"ok\":false}".to_string())
        );
        let _ = stdout.flush();
    }
}
