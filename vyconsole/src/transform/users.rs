//! Transformers for `/users`, `/users/roles`, and `/users/sessions`
//! records.

use serde::{Deserialize, Serialize};

use super::{request_field, text_or_empty};

/// Wire shape of one console user account.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserWire {
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub mfa_enabled: bool,
    #[serde(default)]
    pub mfa_method: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub last_login: Option<String>,
    #[serde(default)]
    pub failed_login_attempts: u32,
    #[serde(default)]
    pub locked_until: Option<String>,
}

fn default_enabled() -> bool {
    true
}

/// Wire shape of one role definition.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoleWire {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub permissions: Vec<String>,
    #[serde(default)]
    pub is_system: bool,
}

/// Wire shape of one active session.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionWire {
    pub session_id: String,
    pub username: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub expires_at: Option<String>,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
    #[serde(default)]
    pub mfa_verified: bool,
}

/// Normalized user account, keyed by its natural `username`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserUi {
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub roles: Vec<String>,
    pub enabled: bool,
    pub mfa_enabled: bool,
    pub mfa_method: String,
    pub created_at: String,
    pub last_login: String,
    pub failed_login_attempts: u32,
    pub locked_until: String,
}

/// Normalized role row, keyed by its natural `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleUi {
    pub name: String,
    pub description: String,
    pub permissions: Vec<String>,
    pub is_system: bool,
}

/// Normalized session row; `id` is positional, the session id is the
/// real identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionUi {
    pub id: usize,
    pub session_id: String,
    pub username: String,
    pub created_at: String,
    pub expires_at: String,
    pub ip_address: String,
    pub user_agent: String,
    pub mfa_verified: bool,
}

/// User update request; the username travels in the URL path, and the
/// account lockout bookkeeping is backend-owned and write-excluded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserUpdateWire {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub roles: Vec<String>,
    pub enabled: bool,
}

/// Normalize one user record.
pub fn to_ui_model(wire: &UserWire) -> UserUi {
    UserUi {
        username: wire.username.clone(),
        full_name: text_or_empty(wire.full_name.as_ref()),
        email: text_or_empty(wire.email.as_ref()),
        roles: wire.roles.clone(),
        enabled: wire.enabled,
        mfa_enabled: wire.mfa_enabled,
        mfa_method: text_or_empty(wire.mfa_method.as_ref()),
        created_at: text_or_empty(wire.created_at.as_ref()),
        last_login: text_or_empty(wire.last_login.as_ref()),
        failed_login_attempts: wire.failed_login_attempts,
        locked_until: text_or_empty(wire.locked_until.as_ref()),
    }
}

/// Normalize one role record.
pub fn role_to_ui_model(wire: &RoleWire) -> RoleUi {
    RoleUi {
        name: wire.name.clone(),
        description: text_or_empty(wire.description.as_ref()),
        permissions: wire.permissions.clone(),
        is_system: wire.is_system,
    }
}

/// Normalize one session record.
pub fn session_to_ui_model(wire: &SessionWire, index: usize) -> SessionUi {
    SessionUi {
        id: index + 1,
        session_id: wire.session_id.clone(),
        username: wire.username.clone(),
        created_at: text_or_empty(wire.created_at.as_ref()),
        expires_at: text_or_empty(wire.expires_at.as_ref()),
        ip_address: text_or_empty(wire.ip_address.as_ref()),
        user_agent: text_or_empty(wire.user_agent.as_ref()),
        mfa_verified: wire.mfa_verified,
    }
}

/// Build the user update request for the mutable account fields.
pub fn to_wire_request(ui: &UserUi) -> UserUpdateWire {
    UserUpdateWire {
        full_name: request_field(&ui.full_name),
        email: request_field(&ui.email),
        roles: ui.roles.clone(),
        enabled: ui.enabled,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        session_to_ui_model, to_ui_model, to_wire_request, SessionWire, UserWire,
    };
    use pretty_assertions::assert_eq;

    #[test]
    fn user_is_keyed_by_username() {
        let wire = UserWire {
            username: "admin".to_string(),
            full_name: Some("Administrator".to_string()),
            roles: vec!["admin".to_string()],
            enabled: true,
            mfa_enabled: true,
            mfa_method: Some("totp".to_string()),
            created_at: Some("2026-01-01T00:00:00Z".to_string()),
            ..UserWire::default()
        };

        let ui = to_ui_model(&wire);
        assert_eq!(ui.username, "admin");
        assert_eq!(ui.mfa_method, "totp");
        assert_eq!(ui.locked_until, "");
    }

    #[test]
    fn update_request_excludes_lockout_bookkeeping() {
        let wire = UserWire {
            username: "operator".to_string(),
            email: Some("op@example.net".to_string()),
            roles: vec!["operator".to_string()],
            failed_login_attempts: 3,
            locked_until: Some("2026-09-01T00:00:00Z".to_string()),
            ..UserWire::default()
        };

        let request = to_wire_request(&to_ui_model(&wire));
        assert_eq!(request.email.as_deref(), Some("op@example.net"));
        assert_eq!(request.roles, vec!["operator"]);

        let body = serde_json::to_string(&request).expect("serialize");
        assert!(!body.contains("failed_login_attempts"));
        assert!(!body.contains("locked_until"));
        assert!(!body.contains("full_name"));
    }

    #[test]
    fn sessions_get_positional_ids() {
        let wire = SessionWire {
            session_id: "abc123".to_string(),
            username: "admin".to_string(),
            ip_address: Some("192.168.1.50".to_string()),
            mfa_verified: true,
            ..SessionWire::default()
        };

        let ui = session_to_ui_model(&wire, 2);
        assert_eq!(ui.id, 3);
        assert_eq!(ui.session_id, "abc123");
        assert_eq!(ui.ip_address, "192.168.1.50");
    }
}
