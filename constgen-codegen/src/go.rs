//! Go constant renderer.
//!
//! Emits one `const ( ... )` block of string constants whose values are the
//! flattened paths, each preceded by a comment naming the originating path.

use crate::builder::CodeBuilder;
use crate::language::Language;
use crate::renderer::{ConstRenderer, RenderRequest, escape_string};

/// Renders the key table as a Go source file.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoRenderer;

impl ConstRenderer for GoRenderer {
    fn language(&self) -> Language {
        Language::Go
    }

    fn render(&self, request: &RenderRequest<'_>) -> String {
        let package = request.package.unwrap_or("main");

        CodeBuilder::go()
            .doc("//", request.header)
            .blank()
            .line(&format!("package {}", package))
            .when(!request.table.is_empty(), |b| {
                b.blank().block_with_close("const (", ")", |b| {
                    b.each(request.table.iter(), |b, entry| {
                        b.doc("//", &entry.path).line(&format!(
                            "{}{} = \"{}\"",
                            request.prefix,
                            entry.ident,
                            escape_string(&entry.path)
                        ))
                    })
                })
            })
            .build()
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
    fn test_render_constants() {
        let table = table_of(&["server.http-port", "user.id"]);
        let code = GoRenderer.render(&RenderRequest {
            table: &table,
            package: Some("config"),
            prefix: "Cfg",
            header: "Code generated by constgen. DO NOT EDIT.",
        });

        assert_eq!(
            code,
            "// Code generated by constgen. DO NOT EDIT.\n\
             \n\
             package config\n\
             \n\
             const (\n\
             \t// server.http-port\n\
             \tCfgServerHTTPPort = \"server.http-port\"\n\
             \t// user.id\n\
             \tCfgUserID = \"user.id\"\n\
             )\n"
        );
    }

    #[test]
    fn test_default_package() {
        let table = table_of(&["a"]);
        let code = GoRenderer.render(&RenderRequest {
            table: &table,
            package: None,
            prefix: "",
            header: "header",
        });
        assert!(code.contains("package main\n"));
        assert!(code.contains("\tA = \"a\"\n"));
    }

    #[test]
    fn test_empty_table_has_no_const_block() {
        let table = table_of(&[]);
        let code = GoRenderer.render(&RenderRequest {
            table: &table,
            package: Some("config"),
            prefix: "",
            header: "header",
        });
        assert_eq!(code, "// header\n\npackage config\n");
    }
}
