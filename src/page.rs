use crate::errors::VideoError;

/// Host token swapped in to get the lightweight markup variant of a page.
const MOBILE_TOKEN: &str = "mbasic";
const DESKTOP_TOKEN: &str = "www";

/// Rewrites the first `www` in `url` to `mbasic`, leaving any later ones untouched.
pub fn mobile_url(url: &str) -> Result<String, VideoError> {
    let invalid = |reason: String| VideoError::InvalidPageUrl {
        url: url.to_owned(),
        reason,
    };
    let parsed = url::Url::parse(url).map_err(|e| invalid(e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {}", parsed.scheme())));
    }
    if parsed.host_str().is_none() {
        return Err(invalid("missing host".to_owned()));
    }
    Ok(url.replacen(DESKTOP_TOKEN, MOBILE_TOKEN, 1))
}

/// Fetches the mobile variant of `url` and parses it.
///
/// Anything other than `200 OK` is reported as [`VideoError::UnexpectedStatus`].
pub async fn fetch_page(client: &reqwest::Client, url: &str) -> Result<scraper::Html, VideoError> {
    let url = mobile_url(url)?;
    log::info!("The URL: {url}");
    let resp = client.get(&url).send().await?;
    let status = resp.status();
    if status != reqwest::StatusCode::OK {
        log::error!("response not ok: {status}");
        return Err(VideoError::UnexpectedStatus(status));
    }
    let html = resp.text().await?;
    Ok(scraper::Html::parse_document(&html))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_mobile_url_replaces_first_www_only() {
        let url = mobile_url("https://www.facebook.com/www/videos/1?www=1").unwrap();
        assert_eq!(url, "https://mbasic.facebook.com/www/videos/1?www=1");
    }

    #[test]
    fn test_mobile_url_without_www_is_unchanged() {
        let url = mobile_url("https://m.facebook.com/watch?v=42").unwrap();
        assert_eq!(url, "https://m.facebook.com/watch?v=42");
    }

    #[test]
    fn test_mobile_url_rejects_malformed_urls() {
        for bad in ["not a url", "ftp://www.facebook.com/v", "www.facebook.com/v"] {
            let err = mobile_url(bad).unwrap_err();
            assert!(
                matches!(err, VideoError::InvalidPageUrl { .. }),
                "{bad}: {err}"
            );
        }
    }

    #[tokio::test]
    async fn test_fetch_page_requests_mobile_variant() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/mbasic/story/www"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<h1>hello</h1>"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = reqwest::Client::new();
        let page = format!("{}/www/story/www", mock_server.uri());
        let document = fetch_page(&client, &page).await.unwrap();

        let selector = scraper::Selector::parse("h1").unwrap();
        let title = document.select(&selector).next().unwrap().inner_html();
        assert_eq!(title, "hello");
    }

    #[tokio::test]
    async fn test_fetch_page_rejects_non_ok_status() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = reqwest::Client::new();
        let err = fetch_page(&client, &format!("{}/www/missing", mock_server.uri()))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            VideoError::UnexpectedStatus(reqwest::StatusCode::NOT_FOUND)
        ));
    }
}
