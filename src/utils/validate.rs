/// 标题校验：非空白，长度不超过 256 字符
pub fn validate_title(title: &str) -> Result<(), &'static str> {
    if title.trim().is_empty() {
        return Err("Title must not be blank");
    }
    if title.chars().count() > 256 {
        return Err("Title must be at most 256 characters");
    }
    Ok(())
}

/// 正文校验：长度不超过 64K 字符
pub fn validate_content(content: &str) -> Result<(), &'static str> {
    if content.chars().count() > 65536 {
        return Err("Content must be at most 65536 characters");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_title() {
        assert!(validate_title("Rust 入门").is_ok());
        assert!(validate_title("a").is_ok());
    }

    #[test]
    fn test_blank_title() {
        assert!(validate_title("").is_err());
        assert!(validate_title("   ").is_err());
    }

    #[test]
    fn test_overlong_title() {
        let long = "字".repeat(257);
        assert!(validate_title(&long).is_err());
        let ok = "字".repeat(256);
        assert!(validate_title(&ok).is_ok());
    }

    #[test]
    fn test_content_length() {
        assert!(validate_content("正文").is_ok());
        let long = "a".repeat(65537);
        assert!(validate_content(&long).is_err());
    }
}
