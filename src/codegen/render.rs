//! # Rendering
//!
//! Converts an [`Artifact`] to source text.

use super::ir::{Artifact, Item};
use super::literal::format_values;

const INDENT: &str = "  ";

impl Artifact {
    /// Render every item, one construct after another.
    ///
    /// The output always ends with a single newline.
    pub fn to_source(&self) -> String {
        let mut out = String::new();

        for item in &self.items {
            match item {
                Item::Comment(text) => {
                    out.push_str("// ");
                    out.push_str(text);
                    out.push('\n');
                }
                Item::Include(header) => {
                    out.push_str(&format!("#include <{}>\n", header));
                }
                Item::Define { name, value } => {
                    out.push_str(&format!("#define {} {}\n", name, value));
                }
                Item::Blank => {
                    out.push('\n');
                }
                Item::Array {
                    name,
                    element,
                    values,
                    per_line,
                } => {
                    out.push_str(&format!(
                        "const {} {}[] PROGMEM = {{\n",
                        element.c_type(),
                        name
                    ));
                    for line in format_values(values, *element, *per_line) {
                        out.push_str(INDENT);
                        out.push_str(&line);
                        out.push('\n');
                    }
                    out.push_str("};\n");
                }
                Item::Listing {
                    element,
                    values,
                    per_line,
                } => {
                    for line in format_values(values, *element, *per_line) {
                        out.push_str(&line);
                        out.push('\n');
                    }
                }
                Item::Initializer { decl, lines } => {
                    out.push_str(&format!("{} = {{\n", decl));
                    for line in lines {
                        out.push_str(INDENT);
                        out.push_str(line);
                        out.push('\n');
                    }
                    out.push_str("};\n");
                }
                Item::Line(text) => {
                    out.push_str(text);
                    out.push('\n');
                }
                Item::Function { signature, body } => {
                    out.push_str(&format!("{} {{\n", signature));
                    for line in body.lines() {
                        if !line.is_empty() {
                            out.push_str(INDENT);
                            out.push_str(line);
                        }
                        out.push('\n');
                    }
                    out.push_str("}\n");
                }
            }
        }

        out
    }
}
