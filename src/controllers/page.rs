use core::fmt::{self, Write as _};

use heapless::String;

use crate::{
    domain::{
        entity::{BlinkMode, LedState, MAX_PEER_ADDR_LEN, PeerAddr},
        ports::MAX_PEERS,
    },
    template,
};

pub(crate) const PAGE_BUFFER_SIZE: usize = 2048;

pub type PageBuffer = String<PAGE_BUFFER_SIZE>;

const HOME_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>LED Control</title>
<link rel="stylesheet" href="/exampleCSS.css">
</head>
<body>
<h1>LED Control</h1>
<div id="LEDStatusArea"><p class="ledStatus">LED Status: {LEDStatus}</p></div>
<button id="ledToggle" type="button">Toggle LED</button>
<h2>Status LED</h2>
<form action="/StatusLEDControl" method="post">
<label>
<input type="radio" name="blinkStatus" value="ON" {blinkCheckedOn}> Blink
</label>
<label>
<input type="radio" name="blinkStatus" value="OFF" {blinkCheckedOff}> Off
</label>
<input type="submit" value="Apply">
</form>
<p class="clients">Connected clients: {callingIP}</p>
<script src="/ledControl.js"></script>
</body>
</html>
"#;

const ERROR_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Error {error}</title>
</head>
<body>
<h1>{error}</h1>
<p>{errorText}</p>
<p><a href="/">Home</a></p>
</body>
</html>
"#;

/// Browser side of the toggle button.
pub(crate) const LED_CONTROL_JS: &str = r#"const statusArea =
  document.getElementById("LEDStatusArea");

function showStatus(text) {
  statusArea.innerHTML = "<p class='ledStatus'>LED Status: " + text + "</p>";
}

const toggleButton = document.getElementById("ledToggle");
toggleButton.addEventListener("click", async (event) => {
  event.preventDefault();
  try {
    const response = await fetch("/ledToggle", {
      method: "POST",
      headers: { "Content-Type": "application/json" },
      body: JSON.stringify({ mode: "toggle" }),
    });
    const data = await response.json();
    if (data.buttonUpdate === "true") {
      showStatus(data.LEDStatus === "ON" ? "ON" : "OFF");
    }
  } catch (err) {
    showStatus("unknown");
  }
});
"#;

/// Stylesheet linked from the home page.
pub(crate) const STYLESHEET: &str = r#"body {
  font-family: sans-serif;
  max-width: 32em;
  margin: 2em auto;
  padding: 0 1em;
}

h1 {
  color: #1f4e79;
}

#ledToggle {
  padding: 0.6em 1.4em;
  font-size: 1.1em;
}

.ledStatus {
  font-weight: bold;
}

.clients {
  color: #555;
  font-size: 0.9em;
}
"#;

const CHECKED: &str = r#"checked="checked""#;

type PeerText = String<{ MAX_PEERS * (MAX_PEER_ADDR_LEN + 2) }>;

/// Render the home page with the current LED state, blink mode and the
/// clients connected right now.
pub fn render_home_page(
    led: LedState,
    blink: BlinkMode,
    peers: &[PeerAddr],
) -> Result<PageBuffer, fmt::Error> {
    let (checked_on, checked_off) = if blink.is_on() {
        (CHECKED, "")
    } else {
        ("", CHECKED)
    };

    let mut calling_ip = PeerText::new();
    for (i, peer) in peers.iter().enumerate() {
        if i > 0 {
            calling_ip.push_str(", ").map_err(|()| fmt::Error)?;
        }
        calling_ip.push_str(peer).map_err(|()| fmt::Error)?;
    }
    if calling_ip.is_empty() {
        calling_ip.push_str("none").map_err(|()| fmt::Error)?;
    }

    let mut page = PageBuffer::new();
    template::render(
        HOME_PAGE,
        &[
            ("LEDStatus", led.as_str()),
            ("blinkCheckedOn", checked_on),
            ("blinkCheckedOff", checked_off),
            ("callingIP", calling_ip.as_str()),
        ],
        &mut page,
    )?;
    Ok(page)
}

/// Render the 404 page for the requested path.
///
/// Paths with characters outside `[A-Za-z0-9./_-]` are shown as `Unknown`.
pub fn render_error_page(path: &str) -> Result<PageBuffer, fmt::Error> {
    let shown = if path.chars().all(|c| {
        c.is_ascii_alphanumeric() || matches!(c, '.' | '/' | '_' | '-')
    }) {
        path
    } else {
        "Unknown"
    };

    let mut error_text = String::<96>::new();
    write!(error_text, "PAGE NOT FOUND: {}", shown)?;

    let mut page = PageBuffer::new();
    template::render(
        ERROR_PAGE,
        &[("error", "404"), ("errorText", error_text.as_str())],
        &mut page,
    )?;
    Ok(page)
}
