//! Client certificate loading for connections to a control plane.
//!
//! A certificate comes from a [`SecretManager`] when one is configured,
//! otherwise from `cert-chain.pem` and `key.pem` in a certificate
//! directory.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use rustls_pki_types::{CertificateDer, PrivateKeyDer};
use tracing::debug;

use crate::error::{MeshlintError, Result};

/// Certificate chain file name inside a certificate directory.
pub const CERT_CHAIN_FILE: &str = "cert-chain.pem";
/// Private key file name inside a certificate directory.
pub const KEY_FILE: &str = "key.pem";
/// Resource name requested from the secret manager.
pub const DEFAULT_RESOURCE: &str = "default";

/// PEM-encoded workload credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretItem {
    pub certificate_chain: Vec<u8>,
    pub private_key: Vec<u8>,
}

impl fmt::Debug for SecretItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretItem")
            .field("certificate_chain", &self.certificate_chain.len())
            .field("private_key", &"<redacted>")
            .finish()
    }
}

/// Produces workload credentials on demand.
pub trait SecretManager: Send + Sync {
    fn generate_secret(&self, resource_name: &str) -> anyhow::Result<SecretItem>;
}

/// A decoded client certificate.
#[derive(Debug)]
pub struct ClientCertificate {
    pub cert_chain: Vec<CertificateDer<'static>>,
    pub private_key: PrivateKeyDer<'static>,
}

/// Where client credentials come from.
#[derive(Clone, Default)]
pub struct ClientCertConfig {
    pub secret_manager: Option<Arc<dyn SecretManager>>,
    pub cert_dir: Option<PathBuf>,
}

impl fmt::Debug for ClientCertConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCertConfig")
            .field("secret_manager", &self.secret_manager.is_some())
            .field("cert_dir", &self.cert_dir)
            .finish()
    }
}

impl ClientCertConfig {
    /// Load the client certificate.
    ///
    /// Returns `Ok(None)` when neither source is configured. The secret
    /// manager takes precedence over the directory.
    pub fn load_client_certificate(&self) -> Result<Option<ClientCertificate>> {
        if let Some(manager) = &self.secret_manager {
            debug!("Requesting client certificate from secret manager");
            let item = manager.generate_secret(DEFAULT_RESOURCE).map_err(|e| {
                MeshlintError::SecretFetch {
                    resource: DEFAULT_RESOURCE.to_string(),
                    message: format!("{:#}", e),
                }
            })?;
            let cert = parse_certificate(
                &item.certificate_chain,
                &item.private_key,
                "secret manager",
            )?;
            return Ok(Some(cert));
        }

        if let Some(dir) = &self.cert_dir {
            debug!("Loading client certificate from {}", dir.display());
            return load_from_dir(dir).map(Some);
        }

        Ok(None)
    }
}

fn load_from_dir(dir: &Path) -> Result<ClientCertificate> {
    let read = |name: &str| {
        let path = dir.join(name);
        fs::read(&path).map_err(|source| MeshlintError::CertificateRead { path, source })
    };
    let chain = read(CERT_CHAIN_FILE)?;
    let key = read(KEY_FILE)?;
    parse_certificate(&chain, &key, &dir.display().to_string())
}

/// Decode a PEM certificate chain and private key.
pub fn parse_certificate(chain_pem: &[u8], key_pem: &[u8], origin: &str) -> Result<ClientCertificate> {
    let invalid = |message: String| MeshlintError::InvalidPem {
        origin: origin.to_string(),
        message,
    };

    let cert_chain = rustls_pemfile::certs(&mut &chain_pem[..])
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| invalid(format!("certificate chain: {}", e)))?;
    if cert_chain.is_empty() {
        return Err(invalid("no certificates found".to_string()));
    }

    let private_key = rustls_pemfile::private_key(&mut &key_pem[..])
        .map_err(|e| invalid(format!("private key: {}", e)))?
        .ok_or_else(|| invalid("no private key found".to_string()))?;

    Ok(ClientCertificate {
        cert_chain,
        private_key,
    })
}
