//! Text or JSON rendering of command reports.

use anyhow::Result;
use serde::Serialize;
use std::fmt::Display;

/// Where command reports go: human-readable text or one JSON document.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    json: bool,
}

impl Output {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    /// Print a report to stdout.
    pub fn emit<T: Serialize + Display>(&self, report: &T) -> Result<()> {
        println!("{}", self.render(report)?);
        Ok(())
    }

    fn render<T: Serialize + Display>(&self, report: &T) -> Result<String> {
        if self.json {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(report.to_string())
        }
    }
}
