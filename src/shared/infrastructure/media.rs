// Media URL hints for the hosted image CDN.
//
// URLs served from the CDN's upload path get automatic format and quality
// selection plus optional size and crop directives. Anything else passes
// through untouched.

const CDN_HOST: &str = "cloudinary.com";
const UPLOAD_SEGMENT: &str = "/upload/";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaTransform {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub crop: Option<String>,
}

impl MediaTransform {
    pub fn width(width: u32) -> Self {
        Self {
            width: Some(width),
            ..Self::default()
        }
    }

    fn directives(&self) -> String {
        let mut directives = String::from("f_auto,q_auto");
        if let Some(width) = self.width.filter(|w| *w > 0) {
            directives.push_str(&format!(",w_{width}"));
        }
        if let Some(height) = self.height.filter(|h| *h > 0) {
            directives.push_str(&format!(",h_{height}"));
        }
        if let Some(crop) = self.crop.as_deref().filter(|c| !c.is_empty()) {
            directives.push_str(&format!(",c_{crop}"));
        }
        directives
    }
}

pub fn optimize_media_url(url: &str, transform: &MediaTransform) -> String {
    if !url.contains(CDN_HOST) {
        return url.to_string();
    }
    let Some(index) = url.find(UPLOAD_SEGMENT) else {
        return url.to_string();
    };
    let (prefix, suffix) = url.split_at(index + UPLOAD_SEGMENT.len());
    format!("{prefix}{}/{suffix}", transform.directives())
}
