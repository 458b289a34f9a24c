// Render tree and themed terminal renderer

use crate::theme::Theme;
use colored::{Color, Colorize};

/// One element of a rendered page. Views build these from data; the
/// [`Renderer`] is the only place that knows how they look.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Heading(String),
    Text(String),
    Muted(String),
    Field { label: String, value: String },
    Badge { label: String, count: usize },
    Alert(String),
    Card { title: String, children: Vec<Node> },
    List(Vec<Node>),
    Table { headers: Vec<String>, rows: Vec<Vec<String>> },
    Empty(String),
}

impl Node {
    pub fn field(label: &str, value: impl ToString) -> Self {
        Node::Field {
            label: label.to_string(),
            value: value.to_string(),
        }
    }

    pub fn heading(text: impl Into<String>) -> Self {
        Node::Heading(text.into())
    }
}

#[derive(Debug, Clone, Copy)]
enum Role {
    Heading,
    Label,
    Accent,
    Muted,
    Alert,
}

pub struct Renderer {
    theme: Theme,
    color: bool,
}

impl Renderer {
    pub fn new(theme: Theme) -> Self {
        Self { theme, color: true }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn render(&self, nodes: &[Node]) -> String {
        let mut out = String::new();
        for node in nodes {
            self.render_node(node, 0, &mut out);
        }
        out
    }

    fn render_node(&self, node: &Node, indent: usize, out: &mut String) {
        let pad = "  ".repeat(indent);
        match node {
            Node::Heading(text) => {
                out.push_str(&format!("{}{}\n", pad, self.paint(text, Role::Heading)));
                out.push_str(&format!(
                    "{}{}\n",
                    pad,
                    self.paint(&"─".repeat(text.chars().count()), Role::Muted)
                ));
            }
            Node::Text(text) => out.push_str(&format!("{}{}\n", pad, text)),
            Node::Muted(text) => out.push_str(&format!("{}{}\n", pad, self.paint(text, Role::Muted))),
            Node::Field { label, value } => {
                out.push_str(&format!(
                    "{}{} {}\n",
                    pad,
                    self.paint(&format!("{}:", label), Role::Label),
                    value
                ));
            }
            Node::Badge { label, count } => {
                out.push_str(&format!(
                    "{}{}\n",
                    pad,
                    self.paint(&format!("[{} ({})]", label, count), Role::Accent)
                ));
            }
            Node::Alert(text) => {
                out.push_str(&format!("{}{}\n", pad, self.paint(&format!("[!] {}", text), Role::Alert)));
            }
            Node::Card { title, children } => {
                out.push_str(&format!("{}{}\n", pad, self.paint(&format!("▸ {}", title), Role::Accent)));
                for child in children {
                    self.render_node(child, indent + 1, out);
                }
            }
            Node::List(items) => {
                for item in items {
                    self.render_node(item, indent, out);
                    out.push('\n');
                }
            }
            Node::Table { headers, rows } => self.render_table(headers, rows, &pad, out),
            Node::Empty(text) => out.push_str(&format!("{}{}\n", pad, self.paint(text, Role::Muted))),
        }
    }

    fn render_table(&self, headers: &[String], rows: &[Vec<String>], pad: &str, out: &mut String) {
        let columns = headers.len();
        let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
        for row in rows {
            for (i, cell) in row.iter().enumerate().take(columns) {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        let line = |cells: &[String], role: Option<Role>| -> String {
            let mut line = String::from(pad);
            for (i, width) in widths.iter().enumerate() {
                let cell = cells.get(i).map(String::as_str).unwrap_or("");
                let padded = format!("{:<width$}", cell, width = width);
                let painted = match (role, i) {
                    (Some(role), _) => self.paint(&padded, role),
                    (None, 0) => self.paint(&padded, Role::Label),
                    (None, _) => padded,
                };
                line.push_str(&painted);
                if i + 1 < widths.len() {
                    line.push_str(" │ ");
                }
            }
            line.trim_end().to_string()
        };

        out.push_str(&line(headers, Some(Role::Heading)));
        out.push('\n');
        let rule: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
        out.push_str(&format!("{}{}\n", pad, self.paint(&rule.join("─┼─"), Role::Muted)));
        for row in rows {
            out.push_str(&line(row.as_slice(), None));
            out.push('\n');
        }
    }

    fn paint(&self, text: &str, role: Role) -> String {
        if !self.color {
            return text.to_string();
        }
        let color = match (self.theme, role) {
            (Theme::Light, Role::Heading) => Color::Blue,
            (Theme::Dark, Role::Heading) => Color::BrightCyan,
            (Theme::Light, Role::Label) => Color::Black,
            (Theme::Dark, Role::Label) => Color::BrightWhite,
            (Theme::Light, Role::Accent) => Color::Green,
            (Theme::Dark, Role::Accent) => Color::BrightYellow,
            (_, Role::Muted) => Color::BrightBlack,
            (_, Role::Alert) => Color::Red,
        };
        match role {
            Role::Heading | Role::Alert | Role::Label => text.color(color).bold().to_string(),
            _ => text.color(color).to_string(),
        }
    }
}
