use crate::application::formatting::escape_html;
use crate::domain::ports::RenderTarget;
use crate::domain::slots::DisplaySlot;
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::RwLock;

/// Dark theme, same palette as the desktop dashboard
const STYLESHEET: &str = "\
body{background:#0A0C10;color:#F0F6FC;font-family:system-ui,sans-serif;margin:0;padding:24px}\
main{display:grid;grid-template-columns:repeat(auto-fill,minmax(320px,1fr));gap:16px}\
section{background:#161B22;border:1px solid #30363D;border-radius:8px;padding:16px}\
h1{margin-top:0}h2{font-size:1.05rem;color:#42A5F5;margin:0 0 8px}\
input{background:#0F1218;color:#F0F6FC;border:1px solid #30363D;border-radius:4px;padding:4px 8px;width:100%}\
.error{color:#FF1744}";

/// Collects slot fragments and assembles them into a standalone page whose
/// element ids match the slot ids.
#[derive(Default)]
pub struct HtmlPageTarget {
    slots: RwLock<BTreeMap<DisplaySlot, String>>,
    pair_input: Option<String>,
}

impl HtmlPageTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value shown in the DCA address field
    pub fn with_pair_input(mut self, address: impl Into<String>) -> Self {
        self.pair_input = Some(address.into());
        self
    }

    pub fn document(&self) -> String {
        let slots = self
            .slots
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let mut html = String::from(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>dexboard</title>\n",
        );
        html.push_str("<style>");
        html.push_str(STYLESHEET);
        html.push_str("</style>\n</head>\n<body>\n<h1>dexboard</h1>\n<main>\n");

        for slot in DisplaySlot::ALL {
            html.push_str("<section>\n<h2>");
            html.push_str(slot.title());
            html.push_str("</h2>\n");
            if slot == DisplaySlot::DcaResult {
                html.push_str("<input id=\"pair-input\" placeholder=\"Pair address\" value=\"");
                html.push_str(&escape_html(self.pair_input.as_deref().unwrap_or_default()));
                html.push_str("\">\n");
            }
            html.push_str("<div id=\"");
            html.push_str(slot.id());
            html.push_str("\">");
            if let Some(fragment) = slots.get(&slot) {
                html.push_str(fragment);
            }
            html.push_str("</div>\n</section>\n");
        }

        html.push_str("</main>\n</body>\n</html>\n");
        html
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.document())
            .with_context(|| format!("Failed to write page to {}", path.display()))
    }
}

impl RenderTarget for HtmlPageTarget {
    fn render(&self, slot: DisplaySlot, fragment: &str) -> Result<()> {
        self.slots
            .write()
            .map_err(|e| anyhow::anyhow!("page lock poisoned: {}", e))?
            .insert(slot, fragment.to_string());
        Ok(())
    }
}
