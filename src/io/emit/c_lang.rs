//! C emitter: static lookup tables plus one accessor function.
//!
//! The artifact layout is one `ini_entry` array per help file, a top-level
//! `file_entry` table mapping filenames to those arrays, and a lookup
//! function doing a linear scan with exact case-sensitive matching. Both
//! tables are NULL-terminated, and a lookup miss returns NULL rather than
//! an error.

use std::collections::HashMap;

use crate::core::config::OutputConfig;
use crate::core::corpus::ParsedCorpus;
use crate::core::errors::{HelpgenError, Result};

use super::{escape_c_string, sanitize_identifier, Emitter};

/// Renders a parsed corpus as a C source file.
#[derive(Debug, Clone)]
pub struct CEmitter {
    lookup_function: String,
}

impl CEmitter {
    /// Create an emitter from the output configuration.
    pub fn new(config: &OutputConfig) -> Self {
        Self {
            lookup_function: config.lookup_function.clone(),
        }
    }

    fn header(&self) -> String {
        format!(
            "// THIS FILE IS GENERATED AUTOMATICALLY! EDITS WILL BE LOST!\n\
             // This file generated by {} {}\n\n\
             #include <stdio.h>\n\
             #include <string.h>\n\n\
             typedef struct {{\n    \
                 const char *section;\n    \
                 const char *content;\n\
             }} ini_entry;\n\n\
             typedef struct {{\n    \
                 const char *filename;\n    \
                 ini_entry *entries;\n\
             }} file_entry;\n\n",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
        )
    }

    fn accessor(&self) -> String {
        format!(
            "\n\
             const char *{name}(const char *filename, const char *topic)\n\
             {{\n    \
                 file_entry *fe;\n    \
                 ini_entry *ie;\n\n    \
                 for (int i = 0; help_files[i].filename != NULL; ++i) {{\n        \
                     fe = &(help_files[i]);\n        \
                     if (strcmp(fe->filename, filename) == 0) {{\n            \
                         for (int j = 0; fe->entries[j].section != NULL; ++j) {{\n                \
                             ie = &(fe->entries[j]);\n                \
                             if (strcmp(ie->section, topic) == 0) {{\n                    \
                                 return ie->content;\n                \
                             }}\n            \
                         }}\n        \
                     }}\n    \
                 }}\n\n    \
                 return NULL;\n\
             }}\n",
            name = self.lookup_function,
        )
    }
}

impl Emitter for CEmitter {
    fn emit(&self, corpus: &ParsedCorpus) -> Result<String> {
        let mut out = self.header();

        // Symbol mangling is not injective; two distinct filenames landing
        // on the same array name would silently drop one of them, so that
        // is a hard error.
        let mut symbols: HashMap<String, String> = HashMap::new();
        let mut file_entries = Vec::new();

        for (filename, sections) in corpus.files() {
            let symbol = format!("ini_entries_{}", sanitize_identifier(filename));
            if let Some(previous) = symbols.insert(symbol.clone(), filename.to_string()) {
                return Err(HelpgenError::emit_symbol(
                    format!(
                        "help files '{previous}' and '{filename}' both map to the \
                         same generated array name"
                    ),
                    symbol,
                ));
            }

            let mut entries = Vec::new();
            for (section, content) in sections {
                entries.push(format!(
                    "    {{ \"{}\", \"{}\" }}",
                    escape_c_string(section),
                    escape_c_string(content)
                ));
            }
            entries.push("    { NULL, NULL }".to_string());

            out.push_str(&format!(
                "static ini_entry {symbol}[] = {{\n{}\n}};\n\n",
                entries.join(",\n")
            ));

            file_entries.push(format!(
                "    {{ \"{}\", {symbol} }}",
                escape_c_string(filename)
            ));
        }
        file_entries.push("    { NULL, NULL }".to_string());

        out.push_str(&format!(
            "static file_entry help_files[] = {{\n{}\n}};\n",
            file_entries.join(",\n")
        ));

        out.push_str(&self.accessor());
        Ok(out)
    }
}
