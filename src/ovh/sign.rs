use sha1::{Digest, Sha1};

/// Compute the `X-Ovh-Signature` header value for a request.
///
/// OVH's scheme: `"$1$" + sha1_hex(secret + "+" + consumer_key + "+" +
/// METHOD + "+" + url + "+" + body + "+" + timestamp)`. The timestamp must
/// be server time, see `OvhClient::time_delta`.
pub(crate) fn signature(
    application_secret: &str,
    consumer_key: &str,
    method: &str,
    url: &str,
    body: &str,
    timestamp: i64,
) -> String {
    let payload =
        format!("{application_secret}+{consumer_key}+{method}+{url}+{body}+{timestamp}");
    let digest = Sha1::digest(payload.as_bytes());
    format!("$1${}", hex::encode(digest))
}
