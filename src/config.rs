use std::path::PathBuf;

const OUTPUT_DIR: &str = "downloaded_images";

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/139.0.0.0 Safari/537.36";

const IMAGE_URLS: [&str; 8] = [
    "https://cyteksolar.com/wp-content/uploads/2025/03/Shimbir-424x580.png",
    "https://cyteksolar.com/wp-content/uploads/2025/03/Dion-Wines-424x580.png",
    "https://cyteksolar.com/wp-content/uploads/2025/03/George-Mathenge-424x543.png",
    "https://cyteksolar.com/wp-content/uploads/2025/03/Mr-Benard-Kisii-424x580.png",
    "https://cyteksolar.com/wp-content/uploads/2025/03/Winebox1-424x580.png",
    "https://cyteksolar.com/wp-content/uploads/2024/02/35746745574_01ea3bcaa1_b-424x580.jpg",
    "https://cyteksolar.com/wp-content/uploads/2024/02/IMG_27411-424x580.jpg",
    "https://cyteksolar.com/wp-content/uploads/2024/02/IMG_24941-424x580.jpg",
];

/// Everything a run needs: what to fetch, where to put it, and the headers sent
/// with every request.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchConfig {
    pub urls: Vec<String>,
    pub output_dir: PathBuf,
    pub headers: Vec<(String, String)>,
}

impl FetchConfig {
    pub fn new(urls: Vec<String>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            urls,
            output_dir: output_dir.into(),
            headers: vec![(String::from("User-Agent"), String::from(USER_AGENT))],
        }
    }

    pub fn with_headers(mut self, headers: Vec<(String, String)>) -> Self {
        self.headers = headers;
        self
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        let urls = IMAGE_URLS.iter().map(|url| url.to_string()).collect();
        Self::new(urls, OUTPUT_DIR)
    }
}
