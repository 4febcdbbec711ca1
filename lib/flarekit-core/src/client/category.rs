use super::HttpMethod;

macro_rules! categories {
    ($($(#[$meta:meta])* $name:ident => $method:ident $path:literal,)+) => {
        /// Descriptor of a Cloudflare endpoint: the HTTP method and the path template.
        ///
        /// Templates are relative to the API base URL and use the positional
        /// `{id-N}` placeholders resolved by [`CallPath`](crate::CallPath).
        ///
        /// # Examples
        ///
        /// ```rust
        /// use flarekit_core::{Category, HttpMethod};
        ///
        /// let category = Category::DnsRecordDetails;
        /// assert_eq!(category.method(), HttpMethod::Get);
        /// assert_eq!(category.path(), "zones/{id-1}/dns_records/{id-2}");
        /// ```
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[non_exhaustive]
        pub enum Category {
            $(
                $(#[$meta])*
                $name,
            )+
        }

        impl Category {
            /// Every known category.
            pub const ALL: &'static [Self] = &[$(Self::$name,)+];

            /// The HTTP method of the endpoint.
            pub fn method(self) -> HttpMethod {
                match self {
                    $(Self::$name => HttpMethod::$method,)+
                }
            }

            /// The path template of the endpoint.
            pub fn path(self) -> &'static str {
                match self {
                    $(Self::$name => $path,)+
                }
            }
        }
    };
}

categories! {
    // User
    /// Details of the authenticated user.
    UserDetails => Get "user",
    /// Edit the authenticated user.
    EditUser => Patch "user",
    /// Check that the API token is valid and active.
    VerifyToken => Get "user/tokens/verify",
    /// List API tokens.
    ListTokens => Get "user/tokens",
    /// Create an API token.
    CreateToken => Post "user/tokens",
    /// Details of an API token: `{id-1}` token.
    TokenDetails => Get "user/tokens/{id-1}",
    /// Delete an API token: `{id-1}` token.
    DeleteToken => Delete "user/tokens/{id-1}",

    // Accounts
    /// List accounts.
    ListAccounts => Get "accounts",
    /// Details of an account: `{id-1}` account.
    AccountDetails => Get "accounts/{id-1}",
    /// Update an account: `{id-1}` account.
    UpdateAccount => Put "accounts/{id-1}",
    /// List account members: `{id-1}` account.
    ListAccountMembers => Get "accounts/{id-1}/members",
    /// Add an account member: `{id-1}` account.
    AddAccountMember => Post "accounts/{id-1}/members",
    /// Details of an account member: `{id-1}` account, `{id-2}` member.
    AccountMemberDetails => Get "accounts/{id-1}/members/{id-2}",
    /// Remove an account member: `{id-1}` account, `{id-2}` member.
    RemoveAccountMember => Delete "accounts/{id-1}/members/{id-2}",

    // Zones
    /// List zones.
    ListZones => Get "zones",
    /// Create a zone.
    CreateZone => Post "zones",
    /// Details of a zone: `{id-1}` zone.
    ZoneDetails => Get "zones/{id-1}",
    /// Edit zone properties: `{id-1}` zone.
    EditZone => Patch "zones/{id-1}",
    /// Delete a zone: `{id-1}` zone.
    DeleteZone => Delete "zones/{id-1}",
    /// Trigger a new activation check: `{id-1}` zone.
    ZoneActivationCheck => Put "zones/{id-1}/activation_check",
    /// Purge cached content, everything or by files/tags/hosts: `{id-1}` zone.
    PurgeCache => Post "zones/{id-1}/purge_cache",

    // Zone settings
    /// All settings of a zone: `{id-1}` zone.
    ListZoneSettings => Get "zones/{id-1}/settings",
    /// One setting of a zone: `{id-1}` zone, `{id-2}` setting name.
    ZoneSettingDetails => Get "zones/{id-1}/settings/{id-2}",
    /// Change one setting of a zone: `{id-1}` zone, `{id-2}` setting name.
    EditZoneSetting => Patch "zones/{id-1}/settings/{id-2}",

    // DNS records
    /// List DNS records: `{id-1}` zone.
    ListDnsRecords => Get "zones/{id-1}/dns_records",
    /// Create a DNS record: `{id-1}` zone.
    CreateDnsRecord => Post "zones/{id-1}/dns_records",
    /// Details of a DNS record: `{id-1}` zone, `{id-2}` record.
    DnsRecordDetails => Get "zones/{id-1}/dns_records/{id-2}",
    /// Overwrite a DNS record: `{id-1}` zone, `{id-2}` record.
    UpdateDnsRecord => Put "zones/{id-1}/dns_records/{id-2}",
    /// Patch a DNS record: `{id-1}` zone, `{id-2}` record.
    PatchDnsRecord => Patch "zones/{id-1}/dns_records/{id-2}",
    /// Delete a DNS record: `{id-1}` zone, `{id-2}` record.
    DeleteDnsRecord => Delete "zones/{id-1}/dns_records/{id-2}",
    /// Export DNS records as a BIND file: `{id-1}` zone.
    ExportDnsRecords => Get "zones/{id-1}/dns_records/export",

    // Page rules
    /// List page rules: `{id-1}` zone.
    ListPageRules => Get "zones/{id-1}/pagerules",
    /// Create a page rule: `{id-1}` zone.
    CreatePageRule => Post "zones/{id-1}/pagerules",
    /// Details of a page rule: `{id-1}` zone, `{id-2}` rule.
    PageRuleDetails => Get "zones/{id-1}/pagerules/{id-2}",
    /// Edit a page rule: `{id-1}` zone, `{id-2}` rule.
    EditPageRule => Patch "zones/{id-1}/pagerules/{id-2}",
    /// Replace a page rule: `{id-1}` zone, `{id-2}` rule.
    UpdatePageRule => Put "zones/{id-1}/pagerules/{id-2}",
    /// Delete a page rule: `{id-1}` zone, `{id-2}` rule.
    DeletePageRule => Delete "zones/{id-1}/pagerules/{id-2}",

    // Firewall access rules
    /// List IP access rules: `{id-1}` zone.
    ListAccessRules => Get "zones/{id-1}/firewall/access_rules/rules",
    /// Create an IP access rule: `{id-1}` zone.
    CreateAccessRule => Post "zones/{id-1}/firewall/access_rules/rules",
    /// Edit an IP access rule: `{id-1}` zone, `{id-2}` rule.
    EditAccessRule => Patch "zones/{id-1}/firewall/access_rules/rules/{id-2}",
    /// Delete an IP access rule: `{id-1}` zone, `{id-2}` rule.
    DeleteAccessRule => Delete "zones/{id-1}/firewall/access_rules/rules/{id-2}",

    // Workers routes
    /// List worker routes: `{id-1}` zone.
    ListWorkerRoutes => Get "zones/{id-1}/workers/routes",
    /// Create a worker route: `{id-1}` zone.
    CreateWorkerRoute => Post "zones/{id-1}/workers/routes",
    /// Details of a worker route: `{id-1}` zone, `{id-2}` route.
    WorkerRouteDetails => Get "zones/{id-1}/workers/routes/{id-2}",
    /// Update a worker route: `{id-1}` zone, `{id-2}` route.
    UpdateWorkerRoute => Put "zones/{id-1}/workers/routes/{id-2}",
    /// Delete a worker route: `{id-1}` zone, `{id-2}` route.
    DeleteWorkerRoute => Delete "zones/{id-1}/workers/routes/{id-2}",

    // Misc
    /// Cloudflare IP ranges.
    ListCloudflareIps => Get "ips",
}
