// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

mod get;
mod post;
pub mod server;
mod state;
mod template;
mod view;

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use reqwest::StatusCode;
    use tempfile::TempDir;
    use tempfile::tempdir;
    use tokio::net::TcpStream;
    use tokio::spawn;
    use tokio::time::sleep;

    use crate::config::Config;
    use crate::error::Fallible;
    use crate::progress::PROGRESS_KEY;
    use crate::server::server::start_server;

    struct TestServer {
        // Held so the state directory outlives the server.
        dir: TempDir,
        url: String,
    }

    async fn start_test_server() -> Fallible<TestServer> {
        let dir = tempdir()?;
        let port = portpicker::pick_unused_port().unwrap();
        let config = Config {
            port,
            state_dir: dir.path().join("state"),
            open: false,
        };
        spawn(async move { start_server(config).await });
        let bind = format!("127.0.0.1:{port}");
        loop {
            if let Ok(stream) = TcpStream::connect(&bind).await {
                drop(stream);
                break;
            }
            sleep(Duration::from_millis(1)).await;
        }
        Ok(TestServer {
            dir,
            url: format!("http://{bind}"),
        })
    }

    impl TestServer {
        fn progress_record(&self) -> Option<String> {
            let path = self.dir.path().join("state").join(PROGRESS_KEY);
            std::fs::read_to_string(path).ok()
        }
    }

    #[tokio::test]
    async fn test_table_of_contents() -> Fallible<()> {
        let server = start_test_server().await?;

        let response = reqwest::get(format!("{}/", server.url)).await?;
        assert!(response.status().is_success());
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "text/html; charset=utf-8"
        );
        let html = response.text().await?;
        assert!(html.contains("Learn Vue"));
        assert!(html.contains("1. Introduction"));
        assert!(html.contains("6. Composables"));
        assert!(html.contains("Hello, Vue!"));
        assert!(html.contains("0 / 19 lessons completed"));

        Ok(())
    }

    #[tokio::test]
    async fn test_static_assets() -> Fallible<()> {
        let server = start_test_server().await?;

        let response = reqwest::get(format!("{}/style.css", server.url)).await?;
        assert!(response.status().is_success());
        assert_eq!(response.headers().get("content-type").unwrap(), "text/css");

        let response = reqwest::get(format!("{}/script.js", server.url)).await?;
        assert!(response.status().is_success());
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "text/javascript"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_not_found() -> Fallible<()> {
        let server = start_test_server().await?;

        let response = reqwest::get(format!("{}/herp-derp", server.url)).await?;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = reqwest::get(format!("{}/lesson/does-not-exist", server.url)).await?;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        Ok(())
    }

    #[tokio::test]
    async fn test_lesson_page() -> Fallible<()> {
        let server = start_test_server().await?;

        let response = reqwest::get(format!("{}/lesson/intro-hello", server.url)).await?;
        assert!(response.status().is_success());
        let html = response.text().await?;
        assert!(html.contains("Hello, Vue!"));
        assert!(html.contains("Chapter 1: Introduction"));
        assert!(html.contains("Mark as done"));
        assert!(html.contains("Hint 1"));
        assert!(html.contains("Show solution"));

        Ok(())
    }

    #[tokio::test]
    async fn test_mark_unmark_reset_flow() -> Fallible<()> {
        let server = start_test_server().await?;
        let client = reqwest::Client::new();

        // Mark the first lesson as done. The redirect lands back on the
        // lesson page, now in its completed state.
        let response = client
            .post(format!("{}/lesson/intro-hello", server.url))
            .form(&[("action", "MarkDone")])
            .send()
            .await?;
        assert!(response.status().is_success());
        let html = response.text().await?;
        assert!(html.contains("Mark as not done"));
        assert!(html.contains("Completed"));
        assert_eq!(
            server.progress_record(),
            Some(r#"["intro-hello"]"#.to_string())
        );

        // The table of contents shows the badge.
        let html = reqwest::get(format!("{}/", server.url)).await?.text().await?;
        assert!(html.contains("✓"));
        assert!(html.contains("1 / 19 lessons completed"));

        // Unmark it again.
        let response = client
            .post(format!("{}/lesson/intro-hello", server.url))
            .form(&[("action", "Unmark")])
            .send()
            .await?;
        assert!(response.status().is_success());
        let html = response.text().await?;
        assert!(html.contains("Mark as done"));
        assert_eq!(server.progress_record(), Some("[]".to_string()));

        // Mark two lessons, then reset from the table of contents.
        client
            .post(format!("{}/lesson/intro-hello", server.url))
            .form(&[("action", "MarkDone")])
            .send()
            .await?;
        client
            .post(format!("{}/lesson/intro-setup", server.url))
            .form(&[("action", "MarkDone")])
            .send()
            .await?;
        let response = client
            .post(format!("{}/", server.url))
            .form(&[("action", "Reset")])
            .send()
            .await?;
        assert!(response.status().is_success());
        let html = response.text().await?;
        assert!(html.contains("0 / 19 lessons completed"));
        // The durable record is erased, not emptied.
        assert_eq!(server.progress_record(), None);

        Ok(())
    }
}
