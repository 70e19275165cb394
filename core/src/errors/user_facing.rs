//! Translation of raw errors into user-facing categories.
//!
//! The presentation layer never shows raw technical messages for transport
//! failures. Every error is mapped through a fixed category table keyed on
//! the classification flags and a closed set of status codes. The mapping
//! is total: any error resolves to exactly one category and the translation
//! itself never fails.

use serde::Serialize;

use super::{ApiError, AuthError, DomainError};

/// How serious a user-facing error is, for display emphasis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
    Critical,
}

/// User-facing error: title, message, actionable next step and retry affordance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserFacingError {
    pub title: String,
    pub message: String,
    pub actionable: String,
    pub can_retry: bool,
    pub severity: Severity,
}

impl UserFacingError {
    fn new(
        title: &str,
        message: impl Into<String>,
        actionable: &str,
        can_retry: bool,
        severity: Severity,
    ) -> Self {
        Self {
            title: title.to_string(),
            message: message.into(),
            actionable: actionable.to_string(),
            can_retry,
            severity,
        }
    }
}

/// Maps domain and transport errors onto the fixed user-facing category table
pub struct ErrorHandler;

impl ErrorHandler {
    /// Translate any error into a user-facing category
    pub fn to_user_friendly(error: &DomainError) -> UserFacingError {
        match error {
            DomainError::Validation { message } => UserFacingError::new(
                "Validation",
                message.clone(),
                "Corrigez les champs indiqués puis réessayez.",
                false,
                Severity::Warning,
            ),
            DomainError::Auth(auth) => Self::from_auth_error(auth),
            DomainError::Api(api) => Self::from_api_error(api),
            DomainError::Internal { .. } => Self::generic(),
        }
    }

    fn from_auth_error(error: &AuthError) -> UserFacingError {
        match error {
            AuthError::InvalidCredentials => UserFacingError::new(
                "Identifiants invalides",
                "L'email ou le mot de passe est incorrect.",
                "Vérifiez vos identifiants puis réessayez.",
                false,
                Severity::Warning,
            ),
            AuthError::NotAuthenticated => UserFacingError::new(
                "Session expirée",
                "Vous n'êtes plus connecté.",
                "Reconnectez-vous pour continuer.",
                false,
                Severity::Warning,
            ),
        }
    }

    fn from_api_error(error: &ApiError) -> UserFacingError {
        if error.is_timeout {
            return UserFacingError::new(
                "Délai d'attente dépassé",
                "Le serveur met trop de temps à répondre.",
                "Réessayez dans quelques instants.",
                true,
                Severity::Warning,
            );
        }

        if error.is_network_error {
            return UserFacingError::new(
                "Connexion impossible",
                "Impossible de contacter le serveur.",
                "Vérifiez votre connexion internet et que le backend est démarré.",
                true,
                Severity::Error,
            );
        }

        match error.status_code {
            Some(400) => UserFacingError::new(
                "Requête invalide",
                "Les informations envoyées n'ont pas été acceptées.",
                "Vérifiez les champs du formulaire puis réessayez.",
                false,
                Severity::Error,
            ),
            Some(401) => UserFacingError::new(
                "Session expirée",
                "Votre session n'est plus valide.",
                "Reconnectez-vous pour continuer.",
                false,
                Severity::Warning,
            ),
            Some(403) => UserFacingError::new(
                "Accès refusé",
                "Vous n'avez pas les droits nécessaires pour cette action.",
                "Contactez un administrateur si le problème persiste.",
                false,
                Severity::Error,
            ),
            Some(404) => UserFacingError::new(
                "Ressource introuvable",
                "La ressource demandée n'existe pas ou plus.",
                "Actualisez la page puis réessayez.",
                false,
                Severity::Error,
            ),
            Some(429) => UserFacingError::new(
                "Trop de requêtes",
                "Vous avez effectué trop de requêtes en peu de temps.",
                "Patientez quelques instants avant de réessayer.",
                true,
                Severity::Warning,
            ),
            Some(503) => UserFacingError::new(
                "Service indisponible",
                "Le service est temporairement indisponible.",
                "Réessayez dans quelques minutes.",
                true,
                Severity::Error,
            ),
            Some(status) if status >= 500 => UserFacingError::new(
                "Erreur serveur",
                "Le serveur a rencontré une erreur inattendue.",
                "Réessayez dans quelques instants.",
                true,
                Severity::Error,
            ),
            _ => Self::generic(),
        }
    }

    fn generic() -> UserFacingError {
        UserFacingError::new(
            "Erreur",
            "Une erreur inattendue est survenue.",
            "Réessayez. Si le problème persiste, contactez le support.",
            true,
            Severity::Error,
        )
    }
}
