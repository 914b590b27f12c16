use crate::error::CompositorError;
use std::cell::RefCell;
use std::time::Instant;

/// Timing samples aggregated under one logical operation.
///
/// A log can parent other logs to show which sub-operations compound a larger
/// one; [`Log::report`] renders the whole subtree with box-drawing prefixes.
#[derive(Debug, Clone, Default)]
pub struct Log {
    name: String,
    records: Vec<f64>,
    children: Vec<Log>,
}

impl Log {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            records: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Recorded duration samples, in seconds.
    pub fn records(&self) -> &[f64] {
        &self.records
    }

    pub fn children(&self) -> &[Log] {
        &self.children
    }

    /// Append one duration sample, in seconds.
    pub fn record(&mut self, delta: f64) {
        self.records.push(delta);
    }

    /// Attach a child log. Attaching a child whose name is already present is
    /// a no-op, so repeated instrumentation cannot duplicate subtrees.
    pub fn inside(&mut self, child: Log) {
        if !self.children.iter().any(|c| c.name == child.name) {
            self.children.push(child);
        }
    }

    /// Arithmetic mean of the samples, rounded to 3 decimal places.
    pub fn average(&self) -> Result<f64, CompositorError> {
        if self.records.is_empty() {
            return Err(CompositorError::NoSamples(self.name.clone()));
        }
        let mean = self.records.iter().sum::<f64>() / self.records.len() as f64;
        Ok((mean * 1000.0).round() / 1000.0)
    }

    /// Render `"<name>: <average>s"` followed by each child subtree, indented
    /// with `" ├─ "`/`" └─ "` prefixes and matching continuation lines.
    pub fn report(&self) -> Result<String, CompositorError> {
        let mut report = format!("{}: {}s", self.name, format_seconds(self.average()?));

        for (index, child) in self.children.iter().enumerate() {
            let sub = child.report()?;
            if index == self.children.len() - 1 {
                report.push_str("\n └─ ");
                report.push_str(&sub.replace('\n', "\n  "));
            } else {
                report.push_str("\n ├─ ");
                report.push_str(&sub.replace('\n', "\n │ "));
            }
        }

        Ok(report)
    }
}

/// Whole seconds still get one decimal place, so an average of 2 prints as
/// `2.0` rather than `2`.
fn format_seconds(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Registry of timing logs, one per logical operation name, kept in
/// first-registration order.
///
/// Uses interior mutability so measurement combinators can share `&Telemetry`;
/// the compositor is single-threaded throughout.
#[derive(Debug, Default)]
pub struct Telemetry {
    logs: RefCell<Vec<Log>>,
}

impl Telemetry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one duration sample under the named log, creating the log on
    /// first use.
    pub fn record(&self, name: &str, delta: f64) {
        let mut logs = self.logs.borrow_mut();
        match logs.iter_mut().find(|log| log.name == name) {
            Some(log) => log.record(delta),
            None => {
                let mut log = Log::new(name);
                log.record(delta);
                logs.push(log);
            }
        }
    }

    /// Time `op` and record the elapsed wall-clock seconds under `name`.
    /// Returns whatever `op` returns.
    pub fn measure<T>(&self, name: &str, op: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let result = op();
        self.record(name, start.elapsed().as_secs_f64());
        result
    }

    /// Time a fallible operation. A failed run records nothing; the error
    /// propagates unchanged.
    pub fn try_measure<T, E>(
        &self,
        name: &str,
        op: impl FnOnce() -> Result<T, E>,
    ) -> Result<T, E> {
        let start = Instant::now();
        let result = op()?;
        self.record(name, start.elapsed().as_secs_f64());
        Ok(result)
    }

    /// Decorating form of [`Telemetry::measure`]: wraps `op` so every
    /// invocation is timed under one log while the return value passes
    /// through untouched.
    pub fn instrument<'a, T, F>(&'a self, name: &str, mut op: F) -> impl FnMut() -> T + 'a
    where
        F: FnMut() -> T + 'a,
    {
        let name = name.to_owned();
        move || {
            let start = Instant::now();
            let result = op();
            self.record(&name, start.elapsed().as_secs_f64());
            result
        }
    }

    /// Snapshot of the named log, if anything was recorded under it.
    pub fn log(&self, name: &str) -> Option<Log> {
        self.logs.borrow().iter().find(|log| log.name == name).cloned()
    }

    /// Render every tracked log, in first-registration order, under a
    /// `Telemetry Report` header.
    pub fn report(&self) -> Result<String, CompositorError> {
        let mut out = String::from("Telemetry Report");
        for log in self.logs.borrow().iter() {
            out.push('\n');
            out.push_str(&log.report()?);
        }
        Ok(out)
    }
}
