//! Config file messages (lookup, set, bulk merge)

pub struct ConfigMessages {
    pub file_not_found: &'static str,
    pub bulk_updated: &'static str,
    pub bulk_nothing_to_update: &'static str,
}

pub const CONFIG_MESSAGES: ConfigMessages = ConfigMessages {
    file_not_found: "{path} not found!",
    bulk_updated: "Updated {path} from environment (prefix '{prefix}').",
    bulk_nothing_to_update: "No {prefix}* environment variables found; nothing to update.",
};
