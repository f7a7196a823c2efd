use std::fmt;

use async_graphql::ErrorExtensions;

#[derive(Debug, Clone)]
pub enum UserqlError {
    NotFound(String),
    Config(String),
    FileOperation(String),
    Serialization(String),
}

impl UserqlError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            UserqlError::NotFound(_) => "E001",
            UserqlError::Config(_) => "E002",
            UserqlError::FileOperation(_) => "E003",
            UserqlError::Serialization(_) => "E004",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            UserqlError::NotFound(_) => "Resource Not Found",
            UserqlError::Config(_) => "Configuration Error",
            UserqlError::FileOperation(_) => "File Operation Error",
            UserqlError::Serialization(_) => "Serialization Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            UserqlError::NotFound(msg) => msg,
            UserqlError::Config(msg) => msg,
            UserqlError::FileOperation(msg) => msg,
            UserqlError::Serialization(msg) => msg,
        }
    }

    /// 格式化为彩色输出（用于 Server 模式）
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

    /// 格式化为简洁输出（用于 CLI 模式）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// Convert into a GraphQL field error.
    ///
    /// The client sees only the bare message; the error code travels in the
    /// `extensions.code` entry of the response.
    pub fn into_graphql_error(self) -> async_graphql::Error {
        let code = self.code().to_string();
        async_graphql::Error::new(self.message()).extend_with(|_, ext| ext.set("code", code))
    }
}

impl fmt::Display for UserqlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for UserqlError {}

// 便捷的构造函数
impl UserqlError {
    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        UserqlError::NotFound(msg.into())
    }

    pub fn user_not_found() -> Self {
        UserqlError::NotFound("User not found".to_string())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        UserqlError::Config(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        UserqlError::FileOperation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        UserqlError::Serialization(msg.into())
    }
}

impl From<std::io::Error> for UserqlError {
    fn from(err: std::io::Error) -> Self {
        UserqlError::FileOperation(err.to_string())
    }
}

impl From<toml::ser::Error> for UserqlError {
    fn from(err: toml::ser::Error) -> Self {
        UserqlError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for UserqlError {
    fn from(err: config::ConfigError) -> Self {
        UserqlError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, UserqlError>;
