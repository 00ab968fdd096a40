//! Tests for page templating and form parsing.

use heapless::String;
use ledtoggle::{
    controllers::{render_error_page, render_home_page},
    domain::{
        entity::{BlinkMode, LedState, PeerAddr},
        ports::MAX_PEERS,
    },
    http::form_value,
    template::render,
};

fn render_to_string(
    template: &str,
    vars: &[(&str, &str)],
) -> std::string::String {
    let mut out = std::string::String::new();
    render(template, vars, &mut out).unwrap();
    out
}

#[test]
fn substitutes_known_variables() {
    let out = render_to_string(
        "<p>LED Status: {LEDStatus}</p><p>{LEDStatus}</p>",
        &[("LEDStatus", "ON")],
    );

    assert_eq!(out, "<p>LED Status: ON</p><p>ON</p>");
}

#[test]
fn keeps_unknown_placeholders() {
    let out = render_to_string("{known} {unknown} {}", &[("known", "yes")]);

    assert_eq!(out, "yes {unknown} {}");
}

#[test]
fn keeps_braces_that_are_not_placeholders() {
    let out = render_to_string(
        "body { color: red; } {a-b} {open",
        &[("color", "blue"), ("a", "x")],
    );

    assert_eq!(out, "body { color: red; } {a-b} {open");
}

#[test]
fn substituted_values_are_not_expanded_again() {
    let out = render_to_string(
        "{first}",
        &[("first", "{second}"), ("second", "nope")],
    );

    assert_eq!(out, "{second}");
}

#[test]
fn fixed_capacity_output_reports_overflow() {
    let mut out = String::<8>::new();
    let vars = [("value", "longer than eight")];

    assert!(render("{value}", &vars, &mut out).is_err());
}

#[test]
fn home_page_fits_its_buffer() {
    let peers: Vec<PeerAddr> = (0..MAX_PEERS)
        .map(|i| {
            let addr = format!("[fe80::1234:5678:9abc:{i:04x}]:65535");
            PeerAddr::try_from(addr.as_str()).unwrap()
        })
        .collect();

    let page = render_home_page(LedState::On, BlinkMode::Off, &peers).unwrap();

    assert!(page.contains("LED Status: ON"));
    assert!(page.contains(r#"value="OFF" checked="checked""#));
    assert!(page.contains("[fe80::1234:5678:9abc:0007]:65535</p>"));
}

#[test]
fn home_page_without_clients_says_none() {
    let page = render_home_page(LedState::Off, BlinkMode::On, &[]).unwrap();

    assert!(page.contains("Connected clients: none</p>"));
}

#[test]
fn error_page_names_the_path() {
    let page = render_error_page("/StatusLED").unwrap();

    assert!(page.contains("<h1>404</h1>"));
    assert!(page.contains("PAGE NOT FOUND: /StatusLED"));
}

#[test]
fn form_value_finds_fields() {
    assert_eq!(form_value("blinkStatus=ON", "blinkStatus"), Some("ON"));
    assert_eq!(
        form_value("a=1&blinkStatus=OFF&b=2", "blinkStatus"),
        Some("OFF")
    );
    assert_eq!(form_value("blinkStatus=ON\r\n", "blinkStatus"), Some("ON"));
    assert_eq!(form_value("blinkStatus", "blinkStatus"), None);
    assert_eq!(form_value("other=ON", "blinkStatus"), None);
    assert_eq!(form_value("", "blinkStatus"), None);
}
