/// 应用层命令（Command）
///
/// 表达“意图”的写操作请求。
/// - `NAME`：命令的稳定名称，用于日志与追踪。避免依赖 `type_name::<T>()`。
/// - `Output`：命令执行成功后交给调用方的结果（调用方可以只记录、不使用）。
pub trait Command: Send + Sync + 'static {
    /// 命令的稳定名称（建议常量字符串，不随重构变化）
    const NAME: &'static str;

    type Output: Send;
}
