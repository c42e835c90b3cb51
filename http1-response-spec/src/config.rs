//
//
//
const LINE_MAX_LEN: usize = 8192;
const HEADERS_MAX_LEN: usize = 65536;

//
//
//
/// Limits applied while reading one response.
#[derive(Debug, Clone)]
pub struct ReadConfig {
    line_max_len: usize,
    headers_max_len: usize,
    body_max_len: usize,
    allow_truncated_body: bool,
    empty_body_for_bodiless_status: bool,
}
impl Default for ReadConfig {
    fn default() -> Self {
        ReadConfig {
            line_max_len: LINE_MAX_LEN,
            headers_max_len: HEADERS_MAX_LEN,
            body_max_len: usize::MAX,
            allow_truncated_body: false,
            empty_body_for_bodiless_status: false,
        }
    }
}
impl ReadConfig {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn set_line_max_len(&mut self, value: usize) -> &mut Self {
        self.line_max_len = value;
        self
    }
    pub fn get_line_max_len(&self) -> usize {
        self.line_max_len
    }
    /// Applies to each header block (the head, and the trailers of a chunked body), CRLFs
    /// included.
    pub fn set_headers_max_len(&mut self, value: usize) -> &mut Self {
        self.headers_max_len = value;
        self
    }
    pub fn get_headers_max_len(&self) -> usize {
        self.headers_max_len
    }
    pub fn set_body_max_len(&mut self, value: usize) -> &mut Self {
        self.body_max_len = value;
        self
    }
    pub fn get_body_max_len(&self) -> usize {
        self.body_max_len
    }
    /// Keep a Content-Length body that ends early instead of failing with `Truncated`.
    pub fn set_allow_truncated_body(&mut self, value: bool) -> &mut Self {
        self.allow_truncated_body = value;
        self
    }
    pub fn get_allow_truncated_body(&self) -> bool {
        self.allow_truncated_body
    }
    /// Treat 1xx, 204 and 304 responses as bodiless whatever their framing fields say.
    /// Off by default, in which case the fields alone decide.
    pub fn set_empty_body_for_bodiless_status(&mut self, value: bool) -> &mut Self {
        self.empty_body_for_bodiless_status = value;
        self
    }
    pub fn get_empty_body_for_bodiless_status(&self) -> bool {
        self.empty_body_for_bodiless_status
    }
}
