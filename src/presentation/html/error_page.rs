/// Minimal standalone page for a failed map request.
pub fn render_error_page(title: &str, message: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"UTF-8\" /><title>{title}</title></head>\n<body><h3>{message}</h3></body>\n</html>\n",
        title = html_escape::encode_text(title),
        message = html_escape::encode_text(message),
    )
}
