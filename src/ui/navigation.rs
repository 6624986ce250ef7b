#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Login,
    ChannelList,
    /// A missing cid sends the user straight back to the channel list.
    Messages { cid: Option<String> },
    Exit,
}
