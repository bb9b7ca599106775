//! 错误处理模块
//!
//! 定义了网格加载与生成中使用的统一错误类型，使用 `thiserror` 提供友好的错误消息。
//!
//! # 设计原则
//!
//! - 使用 `thiserror` 自动实现 `Error` trait
//! - 为每种错误类型提供清晰的上下文信息
//! - 支持错误链（error source）
//! - 所有错误对产生它的调用都是终止性的：不返回部分网格，也不在内部重试

use std::path::PathBuf;

/// 统一的 Result 类型
///
/// 所有可能返回错误的函数都应该使用这个类型。
pub type Result<T> = std::result::Result<T, ShapeMeshError>;

/// 顶层错误类型
#[derive(Debug, thiserror::Error)]
pub enum ShapeMeshError {
    /// 配置错误
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// 网格加载错误
    #[error("Mesh loading error: {0}")]
    MeshLoading(#[from] MeshLoadError),

    /// IO 错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// 配置相关的错误
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// 配置文件未找到
    #[error("Config file not found: {0}")]
    FileNotFound(String),

    /// 配置文件解析失败
    #[error("Failed to parse config: {0}")]
    ParseError(String),

    /// 配置值无效
    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

/// 网格加载相关的错误
#[derive(Debug, thiserror::Error)]
pub enum MeshLoadError {
    /// 解析完成但没有产生任何三角形
    ///
    /// `maybe_not_obj` 为 `true` 表示整个输入中没有出现任何 `v`/`f` 行。
    #[error("The OBJ data appears to have no faces{}", not_obj_hint(.maybe_not_obj))]
    NoFacesFound { maybe_not_obj: bool },

    /// 无法打开文件（不区分具体原因）
    #[error("Cannot load the obj file '{}'", .0.display())]
    FileOpenFailure(PathBuf),

    /// 不支持的文件格式
    #[error("Unsupported mesh format: {0}")]
    UnsupportedFormat(String),

    /// 某一行无法解析
    #[error("Failed to parse OBJ line {line}: {message}")]
    ParseError { line: usize, message: String },

    /// 面引用了尚未定义的顶点
    #[error(
        "Face on line {line} references vertex {index}, but only {vertex_count} vertices are defined"
    )]
    IndexOutOfRange {
        line: usize,
        index: i64,
        vertex_count: usize,
    },
}

fn not_obj_hint(maybe_not_obj: &bool) -> &'static str {
    if *maybe_not_obj {
        "; it might not be an OBJ file"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_faces_message() {
        let err = MeshLoadError::NoFacesFound { maybe_not_obj: false };
        assert_eq!(err.to_string(), "The OBJ data appears to have no faces");

        let err = MeshLoadError::NoFacesFound { maybe_not_obj: true };
        assert!(err.to_string().ends_with("might not be an OBJ file"));
    }

    #[test]
    fn test_file_open_message_contains_path() {
        let err = MeshLoadError::FileOpenFailure(PathBuf::from("Bad file name"));
        assert_eq!(err.to_string(), "Cannot load the obj file 'Bad file name'");
    }

    #[test]
    fn test_top_level_wraps_source_message() {
        let err: ShapeMeshError = MeshLoadError::NoFacesFound { maybe_not_obj: false }.into();
        assert!(matches!(err, ShapeMeshError::MeshLoading(_)));
        assert!(err.to_string().contains("no faces"));
    }
}
