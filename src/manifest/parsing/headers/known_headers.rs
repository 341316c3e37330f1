//! Header names with a known value grammar

use once_cell::sync::Lazy;
use std::collections::HashSet;

pub const BUNDLE_CLASSPATH: &str = "Bundle-ClassPath";
pub const BUNDLE_SYMBOLIC_NAME: &str = "Bundle-SymbolicName";
pub const DYNAMIC_IMPORT_PACKAGE: &str = "DynamicImport-Package";
pub const EXPORT_PACKAGE: &str = "Export-Package";
pub const IMPORT_PACKAGE: &str = "Import-Package";
pub const PRIVATE_PACKAGE: &str = "Private-Package";
pub const PROVIDE_CAPABILITY: &str = "Provide-Capability";
pub const REQUIRE_CAPABILITY: &str = "Require-Capability";
pub const INCLUDE_RESOURCE: &str = "Include-Resource";
pub const INCLUDERESOURCE: &str = "-includeresource";
pub const CONDITIONALPACKAGE: &str = "-conditionalpackage";

// Liferay bnd instructions
pub const PLUGIN_BUNDLE: &str = "-plugin.bundle";
pub const PLUGIN_JSP: &str = "-plugin.jsp";
pub const PLUGIN_NPM: &str = "-plugin.npm";
pub const PLUGIN_RESOURCEBUNDLE: &str = "-plugin.resourcebundle";
pub const PLUGIN_SASS: &str = "-plugin.sass";
pub const PLUGIN_SERVICE: &str = "-plugin.service";
pub const PLUGIN_SPRING: &str = "-plugin.spring";
pub const LIFERAY_CONFIGURATION_PATH: &str = "Liferay-Configuration-Path";
pub const LIFERAY_JS_CONFIG: &str = "Liferay-JS-Config";

/// OSGi headers and bnd instructions whose values are clause lists
pub const OSGI_CLAUSE_HEADERS: &[&str] = &[
    BUNDLE_CLASSPATH,
    BUNDLE_SYMBOLIC_NAME,
    DYNAMIC_IMPORT_PACKAGE,
    EXPORT_PACKAGE,
    IMPORT_PACKAGE,
    PRIVATE_PACKAGE,
    PROVIDE_CAPABILITY,
    REQUIRE_CAPABILITY,
    INCLUDE_RESOURCE,
    INCLUDERESOURCE,
    CONDITIONALPACKAGE,
];

pub const LIFERAY_HEADERS: &[&str] = &[
    PLUGIN_BUNDLE,
    PLUGIN_JSP,
    PLUGIN_NPM,
    PLUGIN_RESOURCEBUNDLE,
    PLUGIN_SASS,
    PLUGIN_SERVICE,
    PLUGIN_SPRING,
    LIFERAY_CONFIGURATION_PATH,
    LIFERAY_JS_CONFIG,
];

static BUILTIN: Lazy<HashSet<String>> = Lazy::new(|| {
    OSGI_CLAUSE_HEADERS
        .iter()
        .chain(LIFERAY_HEADERS)
        .map(|name| name.to_ascii_lowercase())
        .collect()
});

/// Every header the default repository parses as clauses
pub fn builtin_clause_headers() -> impl Iterator<Item = &'static str> {
    OSGI_CLAUSE_HEADERS
        .iter()
        .chain(LIFERAY_HEADERS)
        .copied()
}

/// Whether `name` is a built-in clause header, ignoring ASCII case
pub fn is_builtin_clause_header(name: &str) -> bool {
    BUILTIN.contains(&name.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup_ignores_case() {
        assert!(is_builtin_clause_header("import-package"));
        assert!(is_builtin_clause_header("-PLUGIN.JSP"));
        assert!(!is_builtin_clause_header("Bundle-Name"));
    }

    #[test]
    fn test_builtin_list() {
        assert_eq!(builtin_clause_headers().count(), 20);
    }
}
