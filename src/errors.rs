use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookmarkError {
    Validation(String),
    IndexOutOfRange(String),
    StorageParse(String),
    FileOperation(String),
    Serialization(String),
    Config(String),
    Visit(String),
}

impl BookmarkError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            BookmarkError::Validation(_) => "E001",
            BookmarkError::IndexOutOfRange(_) => "E002",
            BookmarkError::StorageParse(_) => "E003",
            BookmarkError::FileOperation(_) => "E004",
            BookmarkError::Serialization(_) => "E005",
            BookmarkError::Config(_) => "E006",
            BookmarkError::Visit(_) => "E007",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            BookmarkError::Validation(_) => "Validation Error",
            BookmarkError::IndexOutOfRange(_) => "Index Out Of Range",
            BookmarkError::StorageParse(_) => "Storage Parse Error",
            BookmarkError::FileOperation(_) => "File Operation Error",
            BookmarkError::Serialization(_) => "Serialization Error",
            BookmarkError::Config(_) => "Configuration Error",
            BookmarkError::Visit(_) => "Visit Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            BookmarkError::Validation(msg)
            | BookmarkError::IndexOutOfRange(msg)
            | BookmarkError::StorageParse(msg)
            | BookmarkError::FileOperation(msg)
            | BookmarkError::Serialization(msg)
            | BookmarkError::Config(msg)
            | BookmarkError::Visit(msg) => msg,
        }
    }

    /// 格式化为彩色输出
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for BookmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for BookmarkError {}

// 便捷的构造函数
impl BookmarkError {
    pub fn validation<T: Into<String>>(msg: T) -> Self {
        BookmarkError::Validation(msg.into())
    }

    /// Index `index` was used against a list holding `len` bookmarks.
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        BookmarkError::IndexOutOfRange(format!(
            "index {} is out of range for {} bookmark(s)",
            index, len
        ))
    }

    pub fn storage_parse<T: Into<String>>(msg: T) -> Self {
        BookmarkError::StorageParse(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        BookmarkError::FileOperation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        BookmarkError::Serialization(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        BookmarkError::Config(msg.into())
    }

    pub fn visit<T: Into<String>>(msg: T) -> Self {
        BookmarkError::Visit(msg.into())
    }
}

impl From<std::io::Error> for BookmarkError {
    fn from(err: std::io::Error) -> Self {
        BookmarkError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for BookmarkError {
    fn from(err: serde_json::Error) -> Self {
        BookmarkError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for BookmarkError {
    fn from(err: config::ConfigError) -> Self {
        BookmarkError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BookmarkError>;
