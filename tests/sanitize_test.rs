//! Untrusted markup must never reach the HTML document as executable content.

use modelcard_export::export::render_html_document;
use modelcard_export::markup::{escape_html, render_markup};
use modelcard_export::model::{AdditionalInfo, Uses};
use modelcard_export::{ColorMode, ModelCardRecord};
use proptest::prelude::*;

const HOSTILE: &[&str] = &[
    "<script>alert(1)</script>",
    "before <script>alert(1)</script> after",
    "<img src=x onerror=alert(1)>",
    "<body onload=alert(1)>text</body>",
    "[click](javascript:alert(1))",
    "<a href=\"javascript:alert(1)\">x</a>",
    "<iframe src=\"https://evil.example\"></iframe>",
    "<style>body { display: none }</style>",
    "<div onclick=\"steal()\">hi</div>",
    "<svg><script>alert(1)</script></svg>",
];

fn assert_inert(html: &str) {
    let lower = html.to_ascii_lowercase();
    assert!(!lower.contains("<script"), "{html}");
    assert!(!lower.contains("onerror="), "{html}");
    assert!(!lower.contains("onload="), "{html}");
    assert!(!lower.contains("onclick="), "{html}");
    assert!(!lower.contains("javascript:"), "{html}");
    assert!(!lower.contains("<iframe"), "{html}");
    assert!(!lower.contains("<style"), "{html}");
}

#[test]
fn test_markup_fragments_are_inert() {
    for input in HOSTILE {
        assert_inert(&render_markup(input));
    }
}

#[test]
fn test_text_beside_stripped_tags_survives() {
    let html = render_markup("before <script>alert(1)</script> after");
    assert!(html.contains("before"));
    assert!(html.contains("after"));
    assert!(!html.contains("alert(1)"));

    let html = render_markup("call alert(1) <b onmouseover=x>now</b>");
    assert!(html.contains("alert(1)"));
    assert!(html.contains("now"));
    assert!(!html.contains("onmouseover"));
}

#[test]
fn test_allowed_markup_survives() {
    let html = render_markup("**bold** and [a link](https://example.org \"t\")\n\n| a | b |\n|---|---|\n| 1 | 2 |");
    assert!(html.contains("<strong>bold</strong>"));
    assert!(html.contains("href=\"https://example.org\""));
    assert!(html.contains("<table>"));
    assert!(html.contains("<td>1</td>"));
}

#[test]
fn test_document_has_only_its_own_scripts() {
    let record = ModelCardRecord::new("<script>alert('id')</script>")
        .with_summary(HOSTILE.join("\n\n"))
        .with_uses(Uses {
            direct_use: Some(HOSTILE.join("\n\n")),
            ..Uses::default()
        });

    for (mode, own_scripts) in [(ColorMode::Light, 1), (ColorMode::Dark, 1), (ColorMode::Auto, 2)] {
        let html = render_html_document(&record, mode);
        assert_eq!(html.matches("<script").count(), own_scripts, "{mode}");
        assert!(!html.contains("onerror="));
        assert!(!html.contains("onload="));
        assert!(!html.contains("javascript:"));
        assert!(html.contains("Model Card: &lt;script&gt;alert(&#39;id&#39;)&lt;/script&gt;"));
    }
}

#[test]
fn test_plain_text_fields_are_escaped() {
    let mut record = ModelCardRecord::new("demo");
    record.developers = Some("<img src=x onerror=alert(1)>".into());
    record.additional_info = Some(AdditionalInfo {
        model_card_contact: Some("\"><script>x</script>".into()),
        ..AdditionalInfo::default()
    });
    let html = render_html_document(&record, ColorMode::Light);
    assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
    assert!(!html.contains("<img src=x"));
    assert_eq!(html.matches("<script").count(), 1);
}

#[test]
fn test_escape_html() {
    assert_eq!(escape_html("<a href=\"x\">&'</a>"), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;");
}

proptest! {
    #[test]
    fn prop_script_never_survives(prefix in "[a-zA-Z*_#.,]{0,40}", suffix in "[a-zA-Z *_#.,\n]{0,40}") {
        let input = format!("{prefix}<script>alert(1)</script>{suffix}");
        let html = render_markup(&input);
        prop_assert!(!html.to_ascii_lowercase().contains("<script"));
        prop_assert!(!html.contains("alert(1)"));
    }
}
