use super::*;

const NO_IMAGE_MARKUP: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 100 100\">\n\
  <!-- board background -->\n\
  <rect x=\"0\" y=\"0\" width=\"100\" height=\"100\" fill=\"#ffffff\"/>\n\
  <text label=\"a&amp;b\">x &lt; y</text>\n\
</svg>";

// =============================================================
// Round trip
// =============================================================

#[test]
fn round_trip_without_images_is_identity() {
    let document = SvgDocument::parse(NO_IMAGE_MARKUP).expect("markup should parse");
    let markup = document.to_markup().expect("serialize should succeed");
    assert_eq!(markup, NO_IMAGE_MARKUP);
}

#[test]
fn untouched_images_round_trip_byte_identical() {
    let markup = "<svg>\
<image id=\"a\" xlink:href=\"http://one/a.png\"/>\
<image id=\"b\" xlink:href=\"http://two/b.png\"/>\
</svg>";
    let mut document = SvgDocument::parse(markup).expect("markup should parse");
    let positions = document.image_positions();
    assert_eq!(positions.len(), 2);

    document.set_image_href(positions[0], "data:image/png;base64,AA==");
    let rewritten = document.to_markup().expect("serialize should succeed");

    assert!(rewritten.contains("<image id=\"b\" xlink:href=\"http://two/b.png\"/>"));
    assert!(!rewritten.contains("http://one/a.png"));
}

#[test]
fn parse_rejects_malformed_markup() {
    let result = SvgDocument::parse("<svg><rect></wrong></svg>");
    assert!(matches!(result, Err(InlineError::Parse(_))));
}

#[test]
fn parse_rejects_unclosed_elements_at_end_of_input() {
    let result = SvgDocument::parse("<svg><g><image xlink:href=\"http://a/1.png\"/>");
    assert!(matches!(result, Err(InlineError::Parse(_))));
}

// =============================================================
// Image discovery
// =============================================================

#[test]
fn image_positions_finds_images_in_document_order() {
    let markup = "<svg>\
<rect width=\"5\" height=\"5\"/>\
<image xlink:href=\"http://a/1.png\"/>\
<g><image href=\"http://a/2.png\"></image></g>\
</svg>";
    let document = SvgDocument::parse(markup).expect("markup should parse");
    let positions = document.image_positions();

    assert_eq!(positions.len(), 2);
    assert_eq!(
        document.image_href(positions[0]).as_deref(),
        Some("http://a/1.png")
    );
    assert_eq!(
        document.image_href(positions[1]).as_deref(),
        Some("http://a/2.png")
    );
}

#[test]
fn image_positions_matches_namespaced_elements() {
    let markup = "<svg xmlns:svg=\"http://www.w3.org/2000/svg\">\
<svg:image xlink:href=\"http://a/1.png\"/>\
</svg>";
    let document = SvgDocument::parse(markup).expect("markup should parse");
    assert_eq!(document.image_positions().len(), 1);
}

#[test]
fn image_positions_empty_for_document_without_images() {
    let document = SvgDocument::parse(NO_IMAGE_MARKUP).expect("markup should parse");
    assert!(document.image_positions().is_empty());
}

// =============================================================
// Href lookup
// =============================================================

#[test]
fn image_href_prefers_xlink_over_plain() {
    let markup = "<svg><image href=\"http://plain\" xlink:href=\"http://xlink\"/></svg>";
    let document = SvgDocument::parse(markup).expect("markup should parse");
    let position = document.image_positions()[0];
    assert_eq!(document.image_href(position).as_deref(), Some("http://xlink"));
}

#[test]
fn image_href_falls_back_to_plain() {
    let markup = "<svg><image href=\"http://plain\"/></svg>";
    let document = SvgDocument::parse(markup).expect("markup should parse");
    let position = document.image_positions()[0];
    assert_eq!(document.image_href(position).as_deref(), Some("http://plain"));
}

#[test]
fn image_href_none_when_absent() {
    let markup = "<svg><image width=\"5\"/></svg>";
    let document = SvgDocument::parse(markup).expect("markup should parse");
    let position = document.image_positions()[0];
    assert_eq!(document.image_href(position), None);
}

#[test]
fn image_href_unescapes_entities() {
    let markup = "<svg><image xlink:href=\"http://a/1.png?x=1&amp;y=2\"/></svg>";
    let document = SvgDocument::parse(markup).expect("markup should parse");
    let position = document.image_positions()[0];
    assert_eq!(
        document.image_href(position).as_deref(),
        Some("http://a/1.png?x=1&y=2")
    );
}

// =============================================================
// Rewriting
// =============================================================

#[test]
fn set_image_href_drops_xlink_and_appends_plain_href() {
    let markup = "<svg><image x=\"1\" xlink:href=\"http://a/1.png\" y=\"2\"/></svg>";
    let mut document = SvgDocument::parse(markup).expect("markup should parse");
    let position = document.image_positions()[0];

    document.set_image_href(position, "data:image/png;base64,AA==");
    let rewritten = document.to_markup().expect("serialize should succeed");

    assert_eq!(
        rewritten,
        "<svg><image x=\"1\" y=\"2\" href=\"data:image/png;base64,AA==\"/></svg>"
    );
}

#[test]
fn set_image_href_replaces_existing_plain_href_in_place() {
    let markup = "<svg><image href=\"http://a/1.png\" width=\"3\"/></svg>";
    let mut document = SvgDocument::parse(markup).expect("markup should parse");
    let position = document.image_positions()[0];

    document.set_image_href(position, "data:image/png;base64,AA==");
    let rewritten = document.to_markup().expect("serialize should succeed");

    assert_eq!(
        rewritten,
        "<svg><image href=\"data:image/png;base64,AA==\" width=\"3\"/></svg>"
    );
}

#[test]
fn set_image_href_preserves_non_self_closing_form() {
    let markup = "<svg><image xlink:href=\"http://a/1.png\"></image></svg>";
    let mut document = SvgDocument::parse(markup).expect("markup should parse");
    let position = document.image_positions()[0];

    document.set_image_href(position, "data:image/png;base64,AA==");
    let rewritten = document.to_markup().expect("serialize should succeed");

    assert_eq!(
        rewritten,
        "<svg><image href=\"data:image/png;base64,AA==\"></image></svg>"
    );
}
