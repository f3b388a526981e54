use cel_domain::user_event::ChannelContext;

/// 应用层上下文（Application Context）
///
/// 承载一次应用层调用所需的横切信息，目前只有发起调用的通道上下文
/// （`ChannelContext`），它会原样附着到生成的事件上。
///
/// 典型用法：
/// ```rust
/// use cel_application::context::AppContext;
/// use cel_domain::user_event::ChannelContext;
///
/// let ctx = AppContext {
///     channel: ChannelContext::builder()
///         .channel_name("PJSIP/alice-00000001".to_string())
///         .unique_id("1700000000.1".to_string())
///         .build(),
/// };
/// assert_eq!(ctx.channel.unique_id(), Some("1700000000.1"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct AppContext {
    /// 发起调用的通道/会话
    pub channel: ChannelContext,
}
