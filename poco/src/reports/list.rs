//! List command report data structures.

use super::output::{Output, Report};

/// Configured connections, in file order.
#[derive(Debug)]
pub struct ListReport {
    pub connections: Vec<ConnectionInfo>,
}

#[derive(Debug)]
pub struct ConnectionInfo {
    pub name: String,
    pub provider: String,
    /// Where the connection string comes from; never the string itself.
    pub source: String,
    pub schema: Option<String>,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        if self.connections.is_empty() {
            out.preformatted("No connections defined");
            return;
        }

        out.section("Connections");
        for conn in &self.connections {
            let mut details = format!("{}, {}", conn.provider, conn.source);
            if let Some(schema) = &conn.schema {
                details.push_str(&format!(", schema {}", schema));
            }
            out.list_item(&format!("{} ({})", conn.name, details));
        }
    }
}
