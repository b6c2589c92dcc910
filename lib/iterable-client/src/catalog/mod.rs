//! The operation catalog: one declarative entry per remote endpoint.
//!
//! Each [`Operation`] maps a logical name to an HTTP verb, a path template with
//! `{slot}` placeholders, and the declared parameters with their wire names and
//! placements. The table is immutable, process-wide, and consulted by the
//! dispatcher on every call; adding a new remote operation means adding one
//! entry here, nothing else.
//!
//! Local parameter names are snake_case; wire names are whatever casing the
//! remote API expects (`campaign_id` → `campaignId`). The mapping is externally
//! contractual, not stylistic.

use std::collections::HashMap;
use std::sync::LazyLock;

use http::Method;

mod args;
pub use self::args::CallArgs;

mod types;
pub use self::types::{MessageMedium, TemplateType};

pub(crate) mod request;

/// Where a declared parameter is placed in the outgoing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Substituted into a `{slot}` of the path template; always required.
    Path,
    /// Appended to the query string under the wire name.
    Query,
    /// Inserted into the JSON body under the wire name.
    Body,
}

/// A validation rule checked before the request is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// The value must be one of a fixed set of literal strings.
    OneOf(&'static [&'static str]),
    /// The value must be an array of at most this many items.
    MaxItems(usize),
    /// The value must be an integer no greater than this.
    AtMost(i64),
}

/// One declared parameter of an [`Operation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param {
    /// The local, caller-facing name.
    pub name: &'static str,
    /// The exact field spelling the remote API expects.
    pub wire: &'static str,
    /// Where the value goes in the outgoing request.
    pub place: Placement,
    /// Optional validation rule applied before any network activity.
    pub constraint: Option<Constraint>,
}

impl Param {
    const fn new(name: &'static str, wire: &'static str, place: Placement) -> Self {
        Self {
            name,
            wire,
            place,
            constraint: None,
        }
    }

    const fn constrained(mut self, constraint: Constraint) -> Self {
        self.constraint = Some(constraint);
        self
    }
}

/// Immutable descriptor of one remote operation.
#[derive(Debug)]
pub struct Operation {
    /// The logical name used for lookup.
    pub name: &'static str,
    /// The HTTP verb.
    pub method: Method,
    /// The path template; `{slot}` segments are filled from path parameters.
    pub path: &'static str,
    /// The declared parameters, in wire order.
    pub params: &'static [Param],
}

const fn path(name: &'static str) -> Param {
    // Path slots are referenced by their local name inside the template.
    Param::new(name, name, Placement::Path)
}

const fn query(name: &'static str, wire: &'static str) -> Param {
    Param::new(name, wire, Placement::Query)
}

const fn body(name: &'static str, wire: &'static str) -> Param {
    Param::new(name, wire, Placement::Body)
}

/// The process-wide catalog, grouped by endpoint family.
pub static OPERATIONS: &[Operation] = &[
    // Campaigns
    Operation {
        name: "get_campaigns",
        method: Method::GET,
        path: "/api/campaigns",
        params: &[],
    },
    Operation {
        name: "create_campaign",
        method: Method::POST,
        path: "/api/campaigns/create",
        params: &[
            body("name", "name"),
            body("list_ids", "listIds"),
            body("template_id", "templateId"),
            body("suppression_list_ids", "suppressionListIds"),
            body("send_at", "sendAt"),
            body("send_mode", "sendMode"),
            body("start_time_zone", "startTimeZone"),
            body("default_time_zone", "defaultTimeZone"),
            body("data_fields", "dataFields"),
        ],
    },
    Operation {
        name: "get_campaign_metrics",
        method: Method::GET,
        path: "/api/campaigns/metrics",
        params: &[
            query("campaign_id", "campaignId"),
            query("start_date_time", "startDateTime"),
            query("end_date_time", "endDateTime"),
            query("use_new_format", "useNewFormat"),
        ],
    },
    Operation {
        name: "get_child_campaigns",
        method: Method::GET,
        path: "/api/campaigns/recurring/{campaign_id}/childCampaigns",
        params: &[path("campaign_id")],
    },
    // Channels
    Operation {
        name: "get_channels",
        method: Method::GET,
        path: "/api/channels",
        params: &[],
    },
    // Commerce
    Operation {
        name: "track_purchase",
        method: Method::POST,
        path: "/api/commerce/trackPurchase",
        params: &[
            body("user", "user"),
            body("items", "items"),
            body("campaign_id", "campaignId"),
            body("template_id", "templateId"),
            body("total", "total"),
            body("created_at", "createdAt"),
            body("data_fields", "dataFields"),
        ],
    },
    Operation {
        name: "update_cart",
        method: Method::POST,
        path: "/api/commerce/updateCart",
        params: &[body("user", "user"), body("items", "items")],
    },
    // Email
    Operation {
        name: "send_email",
        method: Method::POST,
        path: "/api/email/target",
        params: &[
            body("campaign_id", "campaignId"),
            body("recipient_email", "recipientEmail"),
            body("data_fields", "dataFields"),
            body("send_at", "sendAt"),
            body("allow_repeat_marketing_sends", "allowRepeatMarketingSends"),
            body("metadata", "metadata"),
            body("message_medium", "messageMedium")
                .constrained(Constraint::OneOf(MessageMedium::ALLOWED)),
            body("icon_class", "iconClass"),
            body("name", "name"),
        ],
    },
    Operation {
        name: "view_email_in_browser",
        method: Method::GET,
        path: "/api/email/viewInBrowser",
        params: &[query("email", "email"), query("message_id", "messageId")],
    },
    // Events
    Operation {
        name: "get_events",
        method: Method::GET,
        path: "/api/events/{email}",
        params: &[
            path("email"),
            query("limit", "limit").constrained(Constraint::AtMost(200)),
        ],
    },
    Operation {
        name: "consume_in_app_notification",
        method: Method::POST,
        path: "/api/events/inAppConsume",
        params: &[
            body("email", "email"),
            body("user_id", "userId"),
            body("message_id", "messageId"),
            body("button_index", "buttonIndex"),
        ],
    },
    Operation {
        name: "track_event",
        method: Method::POST,
        path: "/api/events/track",
        params: &[
            body("email", "email"),
            body("event_name", "eventName"),
            body("created_at", "createdAt"),
            body("data_fields", "dataFields"),
            body("user_id", "userId"),
            body("campaign_id", "campaignId"),
            body("template_id", "templateId"),
        ],
    },
    Operation {
        name: "track_in_app_click",
        method: Method::POST,
        path: "/api/events/trackInAppClick",
        params: &[
            body("email", "email"),
            body("user_id", "userId"),
            body("message_id", "messageId"),
            body("button_index", "buttonIndex"),
        ],
    },
    Operation {
        name: "track_in_app_open",
        method: Method::POST,
        path: "/api/events/trackInAppOpen",
        params: &[
            body("email", "email"),
            body("user_id", "userId"),
            body("message_id", "messageId"),
            body("button_index", "buttonIndex"),
        ],
    },
    Operation {
        name: "track_push_open",
        method: Method::POST,
        path: "/api/events/trackPushOpen",
        params: &[
            body("email", "email"),
            body("user_id", "userId"),
            body("campaign_id", "campaignId"),
            body("template_id", "templateId"),
            body("message_id", "messageId"),
            body("created_at", "createdAt"),
            body("data_fields", "dataFields"),
        ],
    },
    Operation {
        name: "track_web_push_click",
        method: Method::POST,
        path: "/api/events/trackWebPushClick",
        params: &[
            body("email", "email"),
            body("user_id", "userId"),
            body("message_id", "messageId"),
            body("campaign_id", "campaignId"),
            body("template_id", "templateId"),
        ],
    },
    // Experiments
    Operation {
        name: "get_experiment_metrics",
        method: Method::GET,
        path: "/api/experiments/metrics",
        params: &[
            query("experiment_id", "experimentId"),
            query("campaign_id", "campaignId"),
            query("start_date_time", "startDateTime"),
            query("end_date_time", "endDateTime"),
        ],
    },
    // Export
    Operation {
        name: "export_data_csv",
        method: Method::GET,
        path: "/api/export/data.csv",
        params: &[
            query("data_type_name", "dataTypeName"),
            query("date_range", "range"),
            query("delimiter", "delimiter"),
        ],
    },
    Operation {
        name: "export_data_json",
        method: Method::GET,
        path: "/api/export/data.json",
        params: &[
            query("data_type_name", "dataTypeName"),
            query("date_range", "range"),
            query("delimiter", "delimiter"),
        ],
    },
    // In-app
    Operation {
        name: "get_in_app_messages",
        method: Method::GET,
        path: "/api/inApp/getMessages",
        params: &[
            query("email", "email"),
            query("user_id", "userId"),
            query("count", "count"),
            query("platform", "platform"),
            query("sdk_version", "SDKVersion"),
        ],
    },
    Operation {
        name: "send_in_app_notification",
        method: Method::POST,
        path: "/api/inApp/target",
        params: &[
            body("campaign_id", "campaignId"),
            body("recipient_email", "recipientEmail"),
            body("data_fields", "dataFields"),
            body("send_at", "sendAt"),
            body("allow_repeat_marketing_sends", "allowRepeatMarketingSends"),
            body("message_medium", "messageMedium")
                .constrained(Constraint::OneOf(MessageMedium::ALLOWED)),
        ],
    },
    // Lists
    Operation {
        name: "get_lists",
        method: Method::GET,
        path: "/api/lists",
        params: &[],
    },
    Operation {
        name: "create_list",
        method: Method::POST,
        path: "/api/lists",
        params: &[body("name", "name")],
    },
    Operation {
        name: "delete_list",
        method: Method::DELETE,
        path: "/api/lists/{list_id}",
        params: &[path("list_id")],
    },
    Operation {
        name: "get_list_size",
        method: Method::GET,
        path: "/api/lists/{list_id}/size",
        params: &[path("list_id")],
    },
    Operation {
        name: "get_list_users",
        method: Method::GET,
        path: "/api/lists/getUsers",
        params: &[query("list_id", "listId")],
    },
    Operation {
        name: "subscribe_to_list",
        method: Method::POST,
        path: "/api/lists/subscribe",
        params: &[body("list_id", "listId"), body("subscribers", "subscribers")],
    },
    Operation {
        name: "unsubscribe_from_list",
        method: Method::POST,
        path: "/api/lists/unsubscribe",
        params: &[
            body("list_id", "listId"),
            body("subscribers", "subscribers"),
            body("campaign_id", "campaignId"),
            body("channel_unsubscribe", "channelUnsubscribe"),
        ],
    },
    // Message types
    Operation {
        name: "get_message_types",
        method: Method::GET,
        path: "/api/messageTypes",
        params: &[],
    },
    // Metadata
    Operation {
        name: "get_metadata_tables",
        method: Method::GET,
        path: "/api/metadata",
        params: &[],
    },
    Operation {
        name: "delete_metadata_table",
        method: Method::DELETE,
        path: "/api/metadata/{table}",
        params: &[path("table")],
    },
    Operation {
        name: "list_metadata_keys",
        method: Method::GET,
        path: "/api/metadata/{table}",
        params: &[path("table"), query("next_marker", "nextMarker")],
    },
    Operation {
        name: "delete_metadata_key",
        method: Method::DELETE,
        path: "/api/metadata/{table}/{key}",
        params: &[path("table"), path("key")],
    },
    Operation {
        name: "get_metadata_key",
        method: Method::GET,
        path: "/api/metadata/{table}/{key}",
        params: &[path("table"), path("key")],
    },
    Operation {
        name: "put_metadata_key",
        method: Method::PUT,
        path: "/api/metadata/{table}/{key}",
        params: &[path("table"), path("key"), body("value", "value")],
    },
    // Push
    Operation {
        name: "send_push_notification",
        method: Method::POST,
        path: "/api/push/target",
        params: &[
            body("campaign_id", "campaignId"),
            body("recipient_email", "recipientEmail"),
            body("data_fields", "dataFields"),
            body("send_at", "sendAt"),
            body("allow_repeat_marketing_sends", "allowRepeatMarketingSends"),
            body("message_medium", "messageMedium")
                .constrained(Constraint::OneOf(MessageMedium::ALLOWED)),
        ],
    },
    // SMS
    Operation {
        name: "send_sms_message",
        method: Method::POST,
        path: "/api/sms/target",
        params: &[
            body("campaign_id", "campaignId"),
            body("recipient_email", "recipientEmail"),
            body("data_fields", "dataFields"),
            body("send_at", "sendAt"),
            body("allow_repeat_marketing_sends", "allowRepeatMarketingSends"),
            body("message_medium", "messageMedium")
                .constrained(Constraint::OneOf(MessageMedium::ALLOWED)),
        ],
    },
    // Templates
    Operation {
        name: "get_templates",
        method: Method::GET,
        path: "/api/templates",
        params: &[
            query("template_type", "templateType")
                .constrained(Constraint::OneOf(TemplateType::ALLOWED)),
            query("message_medium", "messageMedium")
                .constrained(Constraint::OneOf(MessageMedium::ALLOWED)),
            query("start_date_time", "startDateTime"),
            query("end_date_time", "endDateTime"),
        ],
    },
    Operation {
        name: "get_email_template",
        method: Method::GET,
        path: "/api/templates/email/get",
        params: &[query("template_id", "templateId"), query("locale", "locale")],
    },
    Operation {
        name: "update_email_template",
        method: Method::POST,
        path: "/api/templates/email/update",
        params: &[
            body("template_id", "templateId"),
            body("metadata", "metadata"),
            body("name", "name"),
            body("from_name", "fromName"),
            body("from_email", "fromEmail"),
            body("reply_to_email", "replyToEmail"),
            body("subject", "subject"),
            body("preheader_text", "preheaderText"),
            body("cc_emails", "ccEmails"),
            body("bcc_emails", "bccEmails"),
            body("html", "html"),
            body("plain_text", "plainText"),
            body("google_analytics_campaign_name", "googleAnalyticsCampaignName"),
            body("link_parameters", "linkParameters"),
            body("data_feed_id", "dataFeedId"),
            body("cache_data_feed", "cacheDataFeed"),
            body("merge_data_feed_context", "mergeDataFeedContext"),
            body("client_template_id", "clientTemplateId"),
            body("locale", "locale"),
            body("message_type_id", "messageTypeId"),
            body("creator_user_id", "creatorUserId"),
        ],
    },
    Operation {
        name: "upsert_email_template",
        method: Method::POST,
        path: "/api/templates/email/upsert",
        params: &[
            body("client_template_id", "clientTemplateId"),
            body("name", "name"),
            body("from_name", "fromName"),
            body("from_email", "fromEmail"),
            body("reply_to_email", "replyToEmail"),
            body("subject", "subject"),
            body("preheader_text", "preheaderText"),
            body("cc_emails", "ccEmails"),
            body("bcc_emails", "bccEmails"),
            body("html", "html"),
            body("plain_text", "plainText"),
            body("google_analytics_campaign_name", "googleAnalyticsCampaignName"),
            body("link_parameters", "linkParameters"),
            body("data_feed_id", "dataFeedId"),
            body("cache_data_feed", "cacheDataFeed"),
            body("merge_data_feed_context", "mergeDataFeedContext"),
            body("locale", "locale"),
            body("message_type_id", "messageTypeId"),
            body("creator_user_id", "creatorUserId"),
        ],
    },
    Operation {
        name: "get_template_by_client_template_id",
        method: Method::GET,
        path: "/api/templates/getClientTemplateId",
        params: &[query("client_template_id", "clientTemplateId")],
    },
    Operation {
        name: "get_push_template",
        method: Method::GET,
        path: "/api/templates/push/get",
        params: &[query("template_id", "templateId"), query("locale", "locale")],
    },
    Operation {
        name: "update_push_template",
        method: Method::POST,
        path: "/api/templates/push/update",
        params: &[
            body("template_id", "templateId"),
            body("created_at", "createdAt"),
            body("updated_at", "updatedAt"),
            body("name", "name"),
            body("message", "message"),
            body("payload", "payload"),
            body("badge", "badge"),
            body("locale", "locale"),
            body("message_type_id", "messageTypeId"),
            body("sound", "sound"),
            body("deeplink", "deeplink"),
            body("client_template_id", "clientTemplateId"),
            body("campaign_id", "campaignId"),
        ],
    },
    Operation {
        name: "upsert_push_template",
        method: Method::POST,
        path: "/api/templates/push/upsert",
        params: &[
            body("client_template_id", "clientTemplateId"),
            body("name", "name"),
            body("message", "message"),
            body("payload", "payload"),
            body("badge", "badge"),
            body("locale", "locale"),
            body("message_type_id", "messageTypeId"),
            body("sound", "sound"),
            body("deeplink", "deeplink"),
            body("campaign_id", "campaignId"),
        ],
    },
    Operation {
        name: "get_sms_template",
        method: Method::GET,
        path: "/api/templates/sms/get",
        params: &[query("template_id", "templateId"), query("locale", "locale")],
    },
    Operation {
        name: "update_sms_template",
        method: Method::POST,
        path: "/api/templates/sms/update",
        params: &[
            body("template_id", "templateId"),
            body("created_at", "createdAt"),
            body("updated_at", "updatedAt"),
            body("name", "name"),
            body("message", "message"),
            body("locale", "locale"),
            body("message_type_id", "messageTypeId"),
            body("image_url", "imageUrl"),
            body("client_template_id", "clientTemplateId"),
            body("campaign_id", "campaignId"),
        ],
    },
    Operation {
        name: "upsert_sms_template",
        method: Method::POST,
        path: "/api/templates/sms/upsert",
        params: &[
            body("client_template_id", "clientTemplateId"),
            body("name", "name"),
            body("message", "message"),
            body("locale", "locale"),
            body("message_type_id", "messageTypeId"),
            body("image_url", "imageUrl"),
            body("campaign_id", "campaignId"),
        ],
    },
    // Users
    Operation {
        name: "delete_user",
        method: Method::DELETE,
        path: "/api/users/{email}",
        params: &[path("email")],
    },
    Operation {
        name: "get_user",
        method: Method::GET,
        path: "/api/users/{email}",
        params: &[path("email")],
    },
    Operation {
        name: "bulk_update_users",
        method: Method::POST,
        path: "/api/users/bulkUpdate",
        params: &[body("users", "users").constrained(Constraint::MaxItems(50))],
    },
    Operation {
        name: "bulk_update_subscriptions",
        method: Method::POST,
        path: "/api/users/bulkUpdateSubscriptions",
        params: &[body(
            "update_subscriptions_requests",
            "updateSubscriptionsRequests",
        )],
    },
    Operation {
        name: "get_user_by_user_id",
        method: Method::GET,
        path: "/api/users/byUserId",
        params: &[query("user_id", "userId")],
    },
    Operation {
        name: "delete_user_by_user_id",
        method: Method::DELETE,
        path: "/api/users/byUserId/{user_id}",
        params: &[path("user_id")],
    },
    Operation {
        name: "disable_device",
        method: Method::POST,
        path: "/api/users/disableDevice",
        params: &[
            body("token", "token"),
            body("email", "email"),
            body("user_id", "userId"),
        ],
    },
    Operation {
        name: "get_user_by_email",
        method: Method::GET,
        path: "/api/users/getByEmail",
        params: &[query("email", "email")],
    },
    Operation {
        name: "get_user_fields",
        method: Method::GET,
        path: "/api/users/getFields",
        params: &[],
    },
    Operation {
        name: "get_sent_messages",
        method: Method::GET,
        path: "/api/users/getSentMessages",
        params: &[
            query("email", "email"),
            query("user_id", "userId"),
            query("limit", "limit"),
            query("campaign_id", "campaignId"),
            query("start_date_time", "startDateTime"),
            query("end_date_time", "endDateTime"),
            query("exclude_blast_campaigns", "excludeBlastCampaigns"),
            query("message_medium", "messageMedium")
                .constrained(Constraint::OneOf(MessageMedium::ALLOWED)),
        ],
    },
    Operation {
        name: "register_browser_token",
        method: Method::POST,
        path: "/api/users/registerBrowserToken",
        params: &[
            body("email", "email"),
            body("browser_token", "browserToken"),
            body("user_id", "userId"),
        ],
    },
    Operation {
        name: "register_device_token",
        method: Method::POST,
        path: "/api/users/registerDeviceToken",
        params: &[
            body("email", "email"),
            body("device", "device"),
            body("user_id", "userId"),
        ],
    },
    Operation {
        name: "update_user",
        method: Method::POST,
        path: "/api/users/update",
        params: &[
            body("email", "email"),
            body("data_fields", "dataFields"),
            body("user_id", "userId"),
            body("merge_nested_objects", "mergeNestedObjects"),
        ],
    },
    Operation {
        name: "update_email",
        method: Method::POST,
        path: "/api/users/updateEmail",
        params: &[
            body("current_email", "currentEmail"),
            body("new_email", "newEmail"),
        ],
    },
    Operation {
        name: "update_subscriptions",
        method: Method::POST,
        path: "/api/users/updateSubscriptions",
        params: &[
            body("email", "email"),
            body("email_list_ids", "emailListIds"),
            body("unsubscribed_channel_ids", "unsubscribedChannelIds"),
            body("unsubscribed_message_type_ids", "unsubscribedMessageTypeIds"),
            body("campaign_id", "campaignId"),
            body("template_id", "templateId"),
        ],
    },
    // Web push
    Operation {
        name: "send_web_push_notification",
        method: Method::POST,
        path: "/api/webPush/target",
        params: &[
            body("campaign_id", "campaignId"),
            body("recipient_email", "recipientEmail"),
            body("data_fields", "dataFields"),
            body("send_at", "sendAt"),
            body("allow_repeat_marketing_sends", "allowRepeatMarketingSends"),
            body("message_medium", "messageMedium")
                .constrained(Constraint::OneOf(MessageMedium::ALLOWED)),
        ],
    },
    // Workflows
    Operation {
        name: "trigger_workflow",
        method: Method::POST,
        path: "/api/workflows/triggerWorkflow",
        params: &[
            body("email", "email"),
            body("workflow_id", "workflowId"),
            body("data_fields", "dataFields"),
            body("list_id", "listId"),
        ],
    },
];

static INDEX: LazyLock<HashMap<&'static str, &'static Operation>> =
    LazyLock::new(|| OPERATIONS.iter().map(|op| (op.name, op)).collect());

/// Looks up an operation by its logical name.
pub fn find(name: &str) -> Option<&'static Operation> {
    INDEX.get(name).copied()
}

/// Iterates over every operation in the catalog.
pub fn operations() -> impl Iterator<Item = &'static Operation> {
    OPERATIONS.iter()
}
