use embedded_io_async::{Read, Write};

use super::page::{
    LED_CONTROL_JS,
    STYLESHEET,
    render_error_page,
    render_home_page,
};
use crate::{
    domain::{
        dto::{ToggleRejection, ToggleRequest, ToggleResponse},
        entity::BlinkMode,
        ports::{BlinkUsecasesPort, LedUsecasesPort, PeersUsecasesPort},
    },
    http::{
        ContentHeaders,
        ContentType,
        Error as HttpError,
        HttpConnection,
        HttpHandler,
        HttpMethod,
        HttpResult,
        ResponseHeaders,
        TextEncoding,
        form_value,
    },
};

/// Routes browser requests to the LED, status LED and client usecases.
pub struct LedHttpController<'a, L, B, P>
where
    L: LedUsecasesPort,
    B: BlinkUsecasesPort,
    P: PeersUsecasesPort,
{
    led: &'a L,
    blink: &'a B,
    peers: &'a P,
}

impl<'a, L, B, P> LedHttpController<'a, L, B, P>
where
    L: LedUsecasesPort,
    B: BlinkUsecasesPort,
    P: PeersUsecasesPort,
{
    pub const fn new(led: &'a L, blink: &'a B, peers: &'a P) -> Self {
        Self { led, blink, peers }
    }
}

impl<L, B, P> HttpHandler for LedHttpController<'_, L, B, P>
where
    L: LedUsecasesPort,
    B: BlinkUsecasesPort,
    P: PeersUsecasesPort,
{
    async fn handle_request<S: Read + Write>(
        &self,
        mut conn: HttpConnection<'_, S>,
    ) -> HttpResult {
        match conn.route() {
            (HttpMethod::Post, "/ledToggle") => {
                self.handle_toggle(&mut conn).await
            }
            (HttpMethod::Get, "/") => self.handle_home(&mut conn).await,
            (HttpMethod::Get, "/ledControl.js") => {
                write_asset(&mut conn, ContentType::JavaScript, LED_CONTROL_JS)
                    .await
            }
            (HttpMethod::Get, "/exampleCSS.css") => {
                write_asset(&mut conn, ContentType::Css, STYLESHEET).await
            }
            (HttpMethod::Post, "/StatusLEDControl") => {
                self.handle_blink_form(&mut conn).await
            }
            _ => serve_404(&mut conn).await,
        }
    }
}

impl<L, B, P> LedHttpController<'_, L, B, P>
where
    L: LedUsecasesPort,
    B: BlinkUsecasesPort,
    P: PeersUsecasesPort,
{
    async fn handle_toggle<S: Read + Write>(
        &self,
        conn: &mut HttpConnection<'_, S>,
    ) -> HttpResult {
        let request = match conn.read_json::<ToggleRequest>().await {
            Ok(request) => request,
            Err(e) if e.is_bad_request() => {
                let reason = match e {
                    HttpError::NoData => "missing body",
                    HttpError::TooLarge => "body too large",
                    _ => "malformed body",
                };
                return reject_toggle(conn, reason).await;
            }
            Err(e) => return Err(e),
        };

        match self.led.apply_request(&request) {
            Ok(state) => conn.write_json(&ToggleResponse::new(state)).await,
            Err(e) => reject_toggle(conn, e.as_str()).await,
        }
    }

    async fn handle_home<S: Read + Write>(
        &self,
        conn: &mut HttpConnection<'_, S>,
    ) -> HttpResult {
        let peers = self.peers.connected_peers();
        let page = render_home_page(
            self.led.led_state(),
            self.blink.blink_mode(),
            &peers,
        )
        .map_err(|_| HttpError::Encode)?;
        write_html(conn, ResponseHeaders::success(), page.as_bytes()).await
    }

    async fn handle_blink_form<S: Read + Write>(
        &self,
        conn: &mut HttpConnection<'_, S>,
    ) -> HttpResult {
        match conn.read_body().await {
            Ok(body) => {
                let field = core::str::from_utf8(body)
                    .ok()
                    .and_then(|body| form_value(body, "blinkStatus"));
                match field {
                    Some(value) => self
                        .blink
                        .set_blink_mode(BlinkMode::from_form_value(value)),
                    None => log::warn!("http: blinkStatus not found in form"),
                }
            }
            Err(HttpError::NoData) => {
                log::warn!("http: empty status LED form");
            }
            Err(e) if e.is_bad_request() => {
                log::warn!("http: status LED form rejected: {:?}", e);
                let headers = ResponseHeaders::bad_request();
                return conn.write_headers(&headers).await;
            }
            Err(e) => return Err(e),
        }

        self.handle_home(conn).await
    }
}

async fn reject_toggle<S: Read + Write>(
    conn: &mut HttpConnection<'_, S>,
    reason: &'static str,
) -> HttpResult {
    log::warn!("http: toggle rejected: {}", reason);
    conn.write_json_with(
        ResponseHeaders::bad_request(),
        &ToggleRejection::new(reason),
    )
    .await
}

async fn write_asset<S: Read + Write>(
    conn: &mut HttpConnection<'_, S>,
    content_type: ContentType,
    asset: &str,
) -> HttpResult {
    let content = ContentHeaders::new(content_type)
        .with_text_encoding(TextEncoding::Utf8);
    conn.write_response(ResponseHeaders::success(), content, asset.as_bytes())
        .await
}

async fn serve_404<S: Read + Write>(
    conn: &mut HttpConnection<'_, S>,
) -> HttpResult {
    let (_, path) = conn.route();
    let page = render_error_page(path).map_err(|_| HttpError::Encode)?;
    write_html(conn, ResponseHeaders::not_found(), page.as_bytes()).await
}

async fn write_html<S: Read + Write>(
    conn: &mut HttpConnection<'_, S>,
    headers: ResponseHeaders,
    page: &[u8],
) -> HttpResult {
    let content = ContentHeaders::new(ContentType::TextHtml)
        .with_text_encoding(TextEncoding::Utf8);
    conn.write_response(headers, content, page).await
}
