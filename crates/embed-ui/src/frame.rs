//! Frame descriptors
//!
//! A [`FrameDescriptor`] is the fully computed set of attributes for the
//! player `<iframe>`. It carries no behaviour beyond turning itself into
//! markup.

use serde::{Deserialize, Serialize};

/// Computed attributes of the player frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameDescriptor {
    /// Embed URL loaded by the frame
    pub src: String,
    /// CSS width
    pub width: String,
    /// CSS height
    pub height: String,
    /// Accessible title
    pub title: String,
    /// Whether the frame may go full screen
    pub allow_fullscreen: bool,
    /// Whether the frame is drawn without a border
    pub borderless: bool,
    /// Extra CSS class
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    /// Element ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl FrameDescriptor {
    /// Render as an `<iframe>` element
    pub fn to_html(&self) -> String {
        let mut html = String::from("<iframe");

        if let Some(id) = &self.id {
            push_attr(&mut html, "id", id);
        }
        push_attr(&mut html, "src", &self.src);
        if let Some(class_name) = &self.class_name {
            push_attr(&mut html, "class", class_name);
        }
        push_attr(&mut html, "width", &self.width);
        push_attr(&mut html, "height", &self.height);
        if self.allow_fullscreen {
            html.push_str(" allowfullscreen");
        }
        if self.borderless {
            push_attr(&mut html, "style", "border: none;");
        }
        push_attr(&mut html, "title", &self.title);

        html.push_str("></iframe>");
        html
    }
}

fn push_attr(html: &mut String, name: &str, value: &str) {
    html.push(' ');
    html.push_str(name);
    html.push_str("=\"");
    html.push_str(&escape_attribute(value));
    html.push('"');
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
