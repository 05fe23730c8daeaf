use fin_summary::{
    AuthTokens, FallbackStrategy, RegexStrategy, ScriptTagStrategy, TokenExtractionStrategy,
};

use crate::common::{fixture, portal_html};

fn tokens(encparam: &str, id: &str) -> AuthTokens {
    AuthTokens {
        encparam: encparam.into(),
        id: id.into(),
    }
}

#[test]
fn regex_extracts_single_quoted_values() {
    let html = portal_html("var p = { encparam: 'abc123==', id: 'XYZ9' };");
    assert_eq!(
        RegexStrategy::default().extract(&html),
        Some(tokens("abc123==", "XYZ9"))
    );
}

#[test]
fn regex_ignores_order_and_adjacency() {
    let html = portal_html("var a = { id: 'First1' };\n/* ... */\nvar b = { encparam: 'x/y+z=' };");
    assert_eq!(
        RegexStrategy::default().extract(&html),
        Some(tokens("x/y+z=", "First1"))
    );
}

#[test]
fn regex_is_case_insensitive_and_takes_first_match() {
    let html = portal_html("ENCPARAM: 'one'; Id: 'A1'; encparam: 'two'; id: 'B2';");
    assert_eq!(
        RegexStrategy::default().extract(&html),
        Some(tokens("one", "A1"))
    );
}

#[test]
fn regex_requires_both_tokens() {
    let only_enc = portal_html("encparam: 'abc'");
    let only_id = portal_html("id: 'abc'");
    assert_eq!(RegexStrategy::default().extract(&only_enc), None);
    assert_eq!(RegexStrategy::default().extract(&only_id), None);
}

#[test]
fn regex_rejects_non_alphanumeric_id() {
    let html = portal_html("encparam: 'abc'; id: 'has-dash'");
    assert_eq!(RegexStrategy::default().extract(&html), None);
}

#[test]
fn regex_custom_patterns() {
    let strategy = RegexStrategy::with_patterns(r#"enc="([^"]+)""#, r#"sid="(\w+)""#).unwrap();
    let html = r#"<div data-x enc="E1" sid="S1"></div>"#;
    assert_eq!(strategy.extract(html), Some(tokens("E1", "S1")));
}

#[test]
fn script_tag_accepts_double_quotes_and_spacing() {
    let html = portal_html(r#"var cfg = { encparam : "dbl==", id = "Q7" };"#);
    assert_eq!(RegexStrategy::default().extract(&html), None);
    assert_eq!(
        ScriptTagStrategy.extract(&html),
        Some(tokens("dbl==", "Q7"))
    );
}

#[test]
fn script_tag_skips_prefixed_keys_and_text_outside_scripts() {
    let html = r#"<html><body>
<p>id: 'Visible1' encparam: 'visible'</p>
<script>var cmp_id = 'Wrong1'; var opts = { encparam: 'real', id: 'Right1' };</script>
</body></html>"#;
    assert_eq!(
        ScriptTagStrategy.extract(html),
        Some(tokens("real", "Right1"))
    );
}

#[test]
fn script_tag_keeps_scanning_past_invalid_values() {
    let html = "<html><body><script>var id = 'x-y'; var cfg = { encparam: '', encparam: 'e1', id: 'Good1' };</script></body></html>";
    assert_eq!(ScriptTagStrategy.extract(html), Some(tokens("e1", "Good1")));
}

#[test]
fn fallback_uses_first_strategy_that_hits() {
    let chain = FallbackStrategy::default();
    let single = portal_html("encparam: 'abc'; id: 'R1'");
    let double = portal_html(r#"encparam: "abc"; id: "S1""#);
    assert_eq!(chain.extract(&single), Some(tokens("abc", "R1")));
    assert_eq!(chain.extract(&double), Some(tokens("abc", "S1")));
    assert_eq!(FallbackStrategy::new().extract(&single), None);
}

#[test]
fn recorded_portal_page() {
    let html = fixture("portal_005930.html");
    let expected = tokens("TXdQR2xFS3pzRnN1dWZJRk1rK0VNUT09", "SE5Fcnp2");
    assert_eq!(RegexStrategy::default().extract(&html), Some(expected.clone()));
    assert_eq!(ScriptTagStrategy.extract(&html), Some(expected));
}
