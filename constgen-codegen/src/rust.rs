//! Rust constant renderer.
//!
//! Emits `pub const` string items whose values are the flattened paths. The
//! identifiers keep the CamelCase naming scheme shared with the Go output, so
//! the file carries `#![allow(non_upper_case_globals)]`.

use crate::builder::CodeBuilder;
use crate::language::Language;
use crate::renderer::{ConstRenderer, RenderRequest, escape_string};

/// Renders the key table as a Rust source file.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustRenderer;

impl RustRenderer {
    fn constants(builder: CodeBuilder, request: &RenderRequest<'_>) -> CodeBuilder {
        builder.each(request.table.iter(), |b, entry| {
            b.doc("///", &entry.path).line(&format!(
                "pub const {}{}: &str = \"{}\";",
                request.prefix,
                entry.ident,
                escape_string(&entry.path)
            ))
        })
    }
}

impl ConstRenderer for RustRenderer {
    fn language(&self) -> Language {
        Language::Rust
    }

    fn render(&self, request: &RenderRequest<'_>) -> String {
        let builder = CodeBuilder::rust()
            .doc("//", request.header)
            .blank()
            .line("#![allow(non_upper_case_globals)]");

        if request.table.is_empty() {
            return builder.build();
        }

        let builder = builder.blank();
        match request.package {
            Some(package) => builder
                .block_with_close(&format!("pub mod {} {{", package), "}", |b| {
                    Self::constants(b, request)
                })
                .build(),
            None => Self::constants(builder, request).build(),
        }
    }
}

#[cfg(test)]
mod tests {
    use constgen_core::{KeyTable, Scalar};
    use indexmap::IndexMap;

    use super::*;

    fn table_of(paths: &[&str]) -> KeyTable {
        let mut flat = IndexMap::new();
        for path in paths {
            flat.insert(path.to_string(), Scalar::Null);
        }
        KeyTable::from_flat(&flat)
    }

    #[test]
    fn test_render_top_level_constants() {
        let table = table_of(&["server.port"]);
        let code = RustRenderer.render(&RenderRequest {
            table: &table,
            package: None,
            prefix: "",
            header: "Code generated by constgen. DO NOT EDIT.",
        });

        assert_eq!(
            code,
            "// Code generated by constgen. DO NOT EDIT.\n\
             \n\
             #![allow(non_upper_case_globals)]\n\
             \n\
             /// server.port\n\
             pub const ServerPort: &str = \"server.port\";\n"
        );
    }

    #[test]
    fn test_render_in_module() {
        let table = table_of(&["api.url"]);
        let code = RustRenderer.render(&RenderRequest {
            table: &table,
            package: Some("keys"),
            prefix: "Cfg",
            header: "header",
        });

        assert!(code.contains("pub mod keys {\n"));
        assert!(code.contains("    /// api.url\n"));
        assert!(code.contains("    pub const CfgAPIURL: &str = \"api.url\";\n"));
        assert!(code.ends_with("}\n"));
    }

    #[test]
    fn test_empty_table() {
        let table = table_of(&[]);
        let code = RustRenderer.render(&RenderRequest {
            table: &table,
            package: None,
            prefix: "",
            header: "header",
        });
        assert_eq!(code, "// header\n\n#![allow(non_upper_case_globals)]\n");
    }
}
