use std::time::Duration;

use async_stream::stream;
use flowhtml::builder::{
    comment, deferred, el, el_attrs, el_deferred, el_text, fragment, fragment_stream, raw, text,
};
use flowhtml::{render, render_cancellable, CancellationToken, RenderError};

#[tokio::test]
async fn renders_nested_elements_in_document_order() {
    let root = el("ul", [el("li", [text("a")]), el("li", [text("b")])]);
    assert_eq!(render(root).await.unwrap(), "<ul><li>a</li><li>b</li></ul>");
}

#[tokio::test]
async fn string_children_render_as_encoded_text() {
    let root = el("ul", [el_text("li", ["a"]), el_text("li", ["b"])]);
    assert_eq!(render(root).await.unwrap(), "<ul><li>a</li><li>b</li></ul>");

    let escaped = el_text("li", ["<x>"]);
    assert_eq!(render(escaped).await.unwrap(), "<li>&lt;x&gt;</li>");
}

#[tokio::test]
async fn encoded_text_is_escaped() {
    let html = render(text("a<b>c&d\"e")).await.unwrap();
    assert_eq!(html, "a&lt;b&gt;c&amp;d\"e");
    assert!(!html.contains('<'));
    assert!(!html.contains('>'));
}

#[tokio::test]
async fn raw_text_is_emitted_verbatim() {
    let html = render(raw("<b>bold</b>")).await.unwrap();
    assert_eq!(html, "<b>bold</b>");
}

#[tokio::test]
async fn comments_are_escaped() {
    let html = render(comment("a <& b")).await.unwrap();
    assert_eq!(html, "<!--a &lt;&amp; b-->");
}

#[tokio::test]
async fn attribute_values_are_quote_escaped() {
    let root = el("div", []).with_attr(("title", "say \"hi\""));
    assert_eq!(
        render(root).await.unwrap(),
        "<div title=\"say &quot;hi&quot;\"></div>"
    );
}

#[tokio::test]
async fn first_id_wins_and_later_ids_are_dropped() {
    let root = el("div", []).with_attr(("id", "x")).with_attr(("id", "y"));
    assert_eq!(render(root).await.unwrap(), "<div id=\"x\"></div>");
}

#[tokio::test]
async fn classes_accumulate_space_joined() {
    let root = el("div", [])
        .with_attr(("class", "a"))
        .with_attr(("class", "b"));
    assert_eq!(render(root).await.unwrap(), "<div class=\"a b\"></div>");
}

#[tokio::test]
async fn id_and_class_come_first_regardless_of_authoring_order() {
    let root = el_attrs("div", [("data-n", "1"), ("class", "y z"), ("id", "x")], []);
    assert_eq!(
        render(root).await.unwrap(),
        "<div id=\"x\" class=\"y z\" data-n=\"1\"></div>"
    );
}

#[tokio::test]
async fn attribute_map_form_matches_expected_output() {
    let root = el_attrs("div", [("id", "x"), ("class", "y z")], []);
    assert_eq!(
        render(root).await.unwrap(),
        "<div id=\"x\" class=\"y z\"></div>"
    );
}

#[tokio::test]
async fn boolean_attributes_render_bare() {
    let root = el("input", []).with_attr("disabled");
    assert_eq!(render(root).await.unwrap(), "<input disabled></input>");
}

#[tokio::test]
async fn merged_texts_render_like_their_concatenation() {
    let merged = render(text("a<") + text("b")).await.unwrap();
    let whole = render(text("a<b")).await.unwrap();
    assert_eq!(merged, whole);
}

#[tokio::test]
async fn fallback_composition_keeps_the_left_operand() {
    let html = render(fragment([text("a")]) + text("b")).await.unwrap();
    assert_eq!(html, "a");
}

#[tokio::test]
async fn deferred_nodes_resolve_at_render_time() {
    let root = el_deferred("div", || async { text("late") });
    assert_eq!(render(root).await.unwrap(), "<div>late</div>");
}

#[tokio::test]
async fn deferred_combination_resolves_left_then_right() {
    let root = deferred(|| async { el("p", []) }) + deferred(|| async { text("a") });
    assert_eq!(render(root).await.unwrap(), "<p>a</p>");
}

#[tokio::test]
async fn attribute_on_deferred_applies_after_resolution() {
    let root = deferred(|| async { el("div", []) }).with_attr(("id", "x"));
    assert_eq!(render(root).await.unwrap(), "<div id=\"x\"></div>");
}

#[tokio::test]
async fn attribute_on_deferred_non_element_is_dropped() {
    let root = deferred(|| async { text("t") }).with_attr(("id", "x"));
    assert_eq!(render(root).await.unwrap(), "t");
}

#[tokio::test(start_paused = true)]
async fn fragment_stream_preserves_source_order_across_delays() {
    let items = stream! {
        yield el("li", [text("a")]);
        tokio::time::sleep(Duration::from_millis(500)).await;
        yield el("li", [text("b")]);
    };
    let root = el("ul", [fragment_stream(items)]);
    assert_eq!(render(root).await.unwrap(), "<ul><li>a</li><li>b</li></ul>");
}

#[tokio::test]
async fn composed_streams_replay_left_then_right() {
    let left = fragment_stream(futures::stream::iter([text("a")]));
    let right = fragment_stream(futures::stream::iter([text("b")]));
    let html = render((left + right) + text("c")).await.unwrap();
    assert_eq!(html, "abc");
}

#[tokio::test]
async fn pre_cancelled_render_returns_cancelled() {
    let token = CancellationToken::new();
    token.cancel();
    let root = el("ul", [el("li", [text("a")])]);
    assert_eq!(
        render_cancellable(root, &token).await,
        Err(RenderError::Cancelled)
    );
}

#[tokio::test]
async fn cancellation_mid_traversal_discards_partial_output() {
    let token = CancellationToken::new();
    let inner = token.clone();
    let root = el(
        "div",
        [
            text("before"),
            deferred(move || async move {
                inner.cancel();
                text("late")
            }),
        ],
    );
    assert_eq!(
        render_cancellable(root, &token).await,
        Err(RenderError::Cancelled)
    );
}
