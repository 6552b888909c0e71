use std::fs::OpenOptions;
use std::io::Write;
use chrono::Utc;

pub fn log_request(
    method: &str,
    path: &str,
    status: u16,
) {
    let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S");
    let log_entry = format!(
        "{} | {:7} | {:20} | {}\n",
        timestamp, method, path, status
    );

    // Use /app/requests.log in Docker, ./requests.log locally
    let log_path = std::env::var("LOG_PATH")
        .unwrap_or_else(|_| "./requests.log".to_string());

    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        let _ = file.write_all(log_entry.as_bytes());
    } else {
        eprintln!("Failed to write to log file: {}", log_path);
    }
}
