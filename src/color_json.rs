//! Purpose: Render pretty JSON with optional ANSI colorization for CLI output.
//! Exports: colorize_json.
//! Role: Small, pure formatter used by the `show`/`check` emission paths.
//! Invariants: When color is disabled, output equals serde_json::to_string_pretty.
//! Invariants: ANSI escapes appear only when explicitly enabled.
use plan_import::api::ITINERARIES_FIELD;
use serde_json::{Map, Value};

const INDENT: &str = "  ";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Style {
    Key,
    PlanKey,
    Str,
    Number,
    Literal,
    Punct,
}

impl Style {
    // 8/16-color codes only; bright variants wash out on light themes.
    fn code(self) -> &'static str {
        match self {
            Style::Key => "36",
            Style::PlanKey => "1;36",
            Style::Str => "32",
            Style::Number => "33",
            Style::Literal => "35",
            Style::Punct => "39",
        }
    }
}

struct Painter {
    color: bool,
    out: String,
}

impl Painter {
    fn paint(&mut self, text: &str, style: Style) {
        if self.color {
            self.out.push_str("\u{1b}[");
            self.out.push_str(style.code());
            self.out.push('m');
            self.out.push_str(text);
            self.out.push_str("\u{1b}[0m");
        } else {
            self.out.push_str(text);
        }
    }

    fn newline(&mut self, depth: usize) {
        self.out.push('\n');
        self.out.push_str(&INDENT.repeat(depth));
    }

    fn value(&mut self, value: &Value, depth: usize) {
        match value {
            Value::Null => self.paint("null", Style::Literal),
            Value::Bool(flag) => self.paint(if *flag { "true" } else { "false" }, Style::Literal),
            Value::Number(num) => self.paint(&num.to_string(), Style::Number),
            Value::String(text) => self.paint(&quoted(text), Style::Str),
            Value::Array(items) => self.array(items, depth),
            Value::Object(map) => self.object(map, depth),
        }
    }

    fn array(&mut self, items: &[Value], depth: usize) {
        if items.is_empty() {
            self.paint("[]", Style::Punct);
            return;
        }
        self.paint("[", Style::Punct);
        for (idx, item) in items.iter().enumerate() {
            if idx > 0 {
                self.paint(",", Style::Punct);
            }
            self.newline(depth + 1);
            self.value(item, depth + 1);
        }
        self.newline(depth);
        self.paint("]", Style::Punct);
    }

    fn object(&mut self, map: &Map<String, Value>, depth: usize) {
        if map.is_empty() {
            self.paint("{}", Style::Punct);
            return;
        }
        self.paint("{", Style::Punct);
        for (idx, (key, value)) in map.iter().enumerate() {
            if idx > 0 {
                self.paint(",", Style::Punct);
            }
            self.newline(depth + 1);
            // Top-level `itineraries` is what importers look for first.
            let style = if depth == 0 && key == ITINERARIES_FIELD {
                Style::PlanKey
            } else {
                Style::Key
            };
            self.paint(&quoted(key), style);
            self.paint(":", Style::Punct);
            self.out.push(' ');
            self.value(value, depth + 1);
        }
        self.newline(depth);
        self.paint("}", Style::Punct);
    }
}

fn quoted(text: &str) -> String {
    serde_json::to_string(text).unwrap_or_else(|_| "\"\"".to_string())
}

pub fn colorize_json(value: &Value, use_color: bool) -> String {
    let mut painter = Painter {
        color: use_color,
        out: String::new(),
    };
    painter.value(value, 0);
    painter.out
}

#[cfg(test)]
mod tests {
    use super::colorize_json;
    use serde_json::json;

    #[test]
    fn colorize_json_matches_pretty_when_disabled() {
        let value = json!({
            "itineraries": [{"legs": [], "duration": 300}, []],
            "from": {"name": "Hbf", "lat": 49.87},
            "empty": {},
            "flags": [true, null, "x"]
        });
        let plain = colorize_json(&value, false);
        let pretty = serde_json::to_string_pretty(&value).expect("pretty");
        assert_eq!(plain, pretty);
    }

    #[test]
    fn colorize_json_emits_ansi_when_enabled() {
        let value = json!({"itineraries": [], "k": "v", "n": 1, "b": true, "z": null});
        let colored = colorize_json(&value, true);
        assert!(colored.contains("\u{1b}[1;36m\"itineraries\"\u{1b}[0m"));
        assert!(colored.contains("\u{1b}[36m\"k\"\u{1b}[0m"));
        assert!(colored.contains("\u{1b}[32m\"v\"\u{1b}[0m"));
        assert!(colored.contains("\u{1b}[33m1\u{1b}[0m"));
        assert!(colored.contains("\u{1b}[35mtrue\u{1b}[0m"));
        assert!(colored.contains("\u{1b}[35mnull\u{1b}[0m"));
    }

    #[test]
    fn nested_itineraries_key_is_not_highlighted() {
        let value = json!({"debug": {"itineraries": []}});
        let colored = colorize_json(&value, true);
        assert!(!colored.contains("\u{1b}[1;36m"));
    }
}
