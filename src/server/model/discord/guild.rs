use serenity::all::{Guild, PartialGuild};

/// Identity of a Discord guild that owns a voice channel.
///
/// Voice connections are keyed by guild, so a channel cannot be joined until
/// its guild is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildRef {
    /// Discord guild ID as a u64.
    pub id: u64,
    /// Guild display name.
    pub name: String,
}

impl GuildRef {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Converts a cached guild into a guild reference.
impl From<&Guild> for GuildRef {
    fn from(guild: &Guild) -> Self {
        Self::new(guild.id.get(), guild.name.clone())
    }
}

/// Converts a guild fetched over REST into a guild reference.
impl From<PartialGuild> for GuildRef {
    fn from(guild: PartialGuild) -> Self {
        Self::new(guild.id.get(), guild.name)
    }
}
