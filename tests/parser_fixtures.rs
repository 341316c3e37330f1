//! Parser tests over the sample files in tests/fixtures

use bnd_manifest::manifest::ast::{DiagnosticKind, Document, SectionItem, SourceLocation};
use bnd_manifest::manifest::formats::{render_document, serialize_ast_tag, to_treeviz_str};
use bnd_manifest::manifest::lexing::tokenize;
use bnd_manifest::manifest::parsing::parse_document;
use bnd_manifest::manifest::processor::read_source;
use bnd_manifest::manifest::testing::{assert_tokens_cover, ManifestSources};
use rstest::rstest;

fn parse_fixture(name: &str) -> (String, Document) {
    let source = ManifestSources::get_string(name).expect("fixture to exist");
    let doc = parse_document(&source);
    (source, doc)
}

#[rstest(name => ["portlet.bnd", "MANIFEST.MF", "broken.bnd"])]
fn test_fixture_round_trips(name: &str) {
    let (source, doc) = parse_fixture(name);

    assert_tokens_cover(&source, &tokenize(&source), 0, source.len());
    assert_eq!(render_document(&doc), source);
}

#[rstest]
#[case("portlet.bnd", 1, 8)]
#[case("MANIFEST.MF", 2, 12)]
#[case("broken.bnd", 3, 4)]
fn test_fixture_shape(#[case] name: &str, #[case] sections: usize, #[case] headers: usize) {
    let (_, doc) = parse_fixture(name);

    assert_eq!(doc.sections.len(), sections);
    assert_eq!(doc.headers().count(), headers);
}

#[test]
fn test_portlet_backslash_continuations() {
    let (_, doc) = parse_fixture("portlet.bnd");
    let imports = doc.header("Import-Package").unwrap().value.clauses();

    let paths: Vec<&str> = imports.iter().map(|c| c.paths[0].as_str()).collect();
    assert_eq!(
        paths,
        vec!["com.liferay.portal.kernel.*", "javax.portlet", "*"]
    );
    assert_eq!(imports[0].attribute("version"), Some("[7.0,8)"));
    assert_eq!(imports[1].attribute("version"), Some("[2.0,3)"));

    let jsp = doc.header("-plugin.jsp").unwrap().value.clauses();
    assert_eq!(
        jsp[0].paths[0].as_str(),
        "com.liferay.ant.bnd.jsp.JspAnalyzerPlugin"
    );
    assert_eq!(
        doc.header("Web-ContextPath").unwrap().value.as_text(),
        Some("/acme-portlet")
    );
    assert!(!doc.has_errors());
}

#[test]
fn test_manifest_wrapped_lines() {
    let (_, doc) = parse_fixture("MANIFEST.MF");

    let exports = doc.header("Export-Package").unwrap().value.clauses();
    assert_eq!(exports.len(), 2);
    assert_eq!(exports[1].paths[0].as_str(), "com.acme.service.model");
    assert_eq!(exports[1].directive("uses"), Some("com.acme.service.api"));

    let imports = doc.header("Import-Package").unwrap().value.clauses();
    assert_eq!(
        imports[1].paths[0].as_str(),
        "org.osgi.service.component.annotations"
    );
    assert_eq!(imports[1].directive("resolution"), Some("optional"));

    let capability = doc.header("Provide-Capability").unwrap().value.clauses();
    assert_eq!(
        capability[0].attribute("objectClass:List<String>"),
        Some("com.acme.service.api.AcmeService")
    );

    let symbolic = doc.header("Bundle-SymbolicName").unwrap().value.clauses();
    assert_eq!(symbolic[0].directive("singleton"), Some("true"));

    assert_eq!(
        doc.header("Created-By").unwrap().value.as_text(),
        Some("1.8.0_151 (Oracle Corporation)")
    );
    assert_eq!(
        doc.sections[1].header("Name").unwrap().value.as_text(),
        Some("com/acme/service/api/")
    );
}

#[test]
fn test_crlf_manifest_reads_like_lf() {
    let raw = ManifestSources::get_string("windows.MF").unwrap();
    assert!(raw.contains("\r\n"));

    let source = read_source(ManifestSources::path("windows.MF")).unwrap();
    assert!(!source.contains('\r'));

    let doc = parse_document(&source);
    assert_eq!(doc.sections.len(), 2);
    assert_eq!(doc.headers().count(), 5);
    assert!(doc.diagnostics().is_empty());

    let imports = doc.header("Import-Package").unwrap().value.clauses();
    assert_eq!(imports.len(), 2);
    assert_eq!(imports[0].attribute("version"), Some("[1.8,2)"));
    assert_eq!(imports[1].paths[0].as_str(), "javax.servlet");
    assert_eq!(
        doc.sections[1].header("Sealed").unwrap().value.as_text(),
        Some("true")
    );
}

#[test]
fn test_broken_diagnostics() {
    let (source, doc) = parse_fixture("broken.bnd");
    let location = SourceLocation::new(&source);

    let found: Vec<(DiagnosticKind, usize, usize)> = doc
        .diagnostics()
        .iter()
        .map(|d| {
            let position = location.byte_to_position(d.range.start);
            (d.kind, position.line, position.column)
        })
        .collect();

    assert_eq!(
        found,
        vec![
            (DiagnosticKind::HeaderExpected, 0, 0),
            (DiagnosticKind::ColonExpected, 2, 22),
        ]
    );

    assert!(matches!(doc.sections[0].items[0], SectionItem::Error(_)));
    assert!(doc.sections[1].items.is_empty());
    assert_eq!(
        doc.sections[2]
            .header("Private-Package")
            .unwrap()
            .value
            .clauses()
            .len(),
        1
    );
}

#[test]
fn test_broken_tag_snapshot() {
    let (_, doc) = parse_fixture("broken.bnd");

    insta::assert_snapshot!(serialize_ast_tag(&doc), @r###"
    <document>
      <section>
        <error>Header expected</error>
        <header name="Bundle-Name"><value>Broken</value></header>
        <header name="this line has no colon"><error>&apos;:&apos; expected</error></header>
        <header name="Bundle-Version"><value>1.0</value></header>
      </section>
      <section></section>
      <section>
        <header name="Private-Package"><clauses>
          <clause><path>com.acme.internal</path></clause>
        </clauses></header>
      </section>
    </document>
    "###);
}

#[test]
fn test_portlet_treeviz_snapshot() {
    let (_, doc) = parse_fixture("portlet.bnd");

    insta::assert_snapshot!(to_treeviz_str(&doc), @r###"
    └─ section: 8 headers
      ├─ header: Bundle-Name = Acme Portlet
      ├─ header: Bundle-SymbolicName (1 clause)
      │ └─ clause: com.acme.portlet
      ├─ header: Bundle-Version = 1.0.0
      ├─ header: Export-Package (1 clause)
      │ └─ clause: com.acme.portlet.api;version=1...
      ├─ header: Import-Package (3 clauses)
      │ ├─ clause: com.liferay.portal.kernel.*;ve...
      │ ├─ clause: javax.portlet;version=[2.0,3)
      │ └─ clause: *
      ├─ header: -plugin.jsp (1 clause)
      │ └─ clause: com.liferay.ant.bnd.jsp.JspAna...
      ├─ header: Liferay-JS-Config (1 clause)
      │ └─ clause: /META-INF/resources/js/config....
      └─ header: Web-ContextPath = /acme-portlet
    "###);
}
