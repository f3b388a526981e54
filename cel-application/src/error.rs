use cel_domain::error::BuildError;

#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("invalid arguments: {0}")]
    Build(#[from] BuildError),
}

impl AppError {
    /// 是否为参数构建失败（与投递失败区分开，供调用方选择退出码等）
    pub fn is_build_error(&self) -> bool {
        matches!(self, AppError::Build(_))
    }
}
