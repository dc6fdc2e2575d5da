//! NDJSON streaming events for agent integration.
//!
//! Emits progress events to stderr while a batch runs, one JSON object per
//! line. Disabled emitters are no-ops so the batch code can emit
//! unconditionally.

#[derive(Debug, Clone, Copy)]
pub struct StreamEmitter {
    enabled: bool,
}

impl StreamEmitter {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn emit_json(&self, json: &str) {
        if self.enabled {
            eprintln!("{}", json);
        }
    }

    pub fn emit_batch_started(&self, manifest: &str, model_name: &str, total_records: usize) {
        let manifest = serde_json::to_string(manifest).unwrap_or_else(|_| "null".to_string());
        let model = serde_json::to_string(model_name).unwrap_or_else(|_| "null".to_string());
        let json = format!(
            r#"{{"event":"batch_started","manifest":{},"model_name":{},"total_records":{}}}"#,
            manifest, model, total_records
        );
        self.emit_json(&json);
    }

    pub fn emit_record_complete(
        &self,
        record_index: usize,
        total_records: usize,
        key: &str,
        successful: bool,
    ) {
        let progress_pct = if total_records > 0 {
            (record_index + 1) as f64 / total_records as f64 * 100.0
        } else {
            0.0
        };
        let key = serde_json::to_string(key).unwrap_or_else(|_| "null".to_string());
        let json = format!(
            r#"{{"event":"record_complete","record_index":{},"total_records":{},"key":{},"successful":{},"progress_pct":{:.1}}}"#,
            record_index, total_records, key, successful, progress_pct
        );
        self.emit_json(&json);
    }

    pub fn emit_batch_complete(&self, total_records: usize, failures: usize, elapsed_ms: u64) {
        let json = format!(
            r#"{{"event":"batch_complete","total_records":{},"failures":{},"elapsed_ms":{}}}"#,
            total_records, failures, elapsed_ms
        );
        self.emit_json(&json);
    }

    pub fn emit_error(&self, code: &str, message: &str) {
        let message = serde_json::to_string(message).unwrap_or_else(|_| "null".to_string());
        let json = format!(r#"{{"event":"error","code":"{}","message":{}}}"#, code, message);
        self.emit_json(&json);
    }
}
