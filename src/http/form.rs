/// Find a field in an `application/x-www-form-urlencoded` body.
///
/// Values are returned as sent, without percent-decoding.
pub fn form_value<'a>(body: &'a str, name: &str) -> Option<&'a str> {
    body.trim_end_matches(['\r', '\n'])
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find_map(|(key, value)| (key == name).then_some(value))
}
