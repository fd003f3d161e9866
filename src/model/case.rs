use crate::model::AgentId;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Store-assigned identifier for Cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaseId(pub u64);

impl From<u64> for CaseId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for CaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Case status. Any value may replace any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStatus {
    Aberto,
    Solucionado,
}

impl FromStr for CaseStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "aberto" => Ok(Self::Aberto),
            "solucionado" => Ok(Self::Solucionado),
            _ => Err(()),
        }
    }
}

/// A police case, always assigned to exactly one Agent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Case {
    pub id: CaseId,
    pub titulo: String,
    pub descricao: String,
    pub status: CaseStatus,
    pub agente_id: AgentId,
}

/// A fully validated Case payload (create or full replace).
#[derive(Debug, Clone, PartialEq)]
pub struct CaseDraft {
    pub titulo: String,
    pub descricao: String,
    pub status: CaseStatus,
    pub agente_id: AgentId,
}

/// A validated partial change. `None` fields are left as stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CasePatch {
    pub titulo: Option<String>,
    pub descricao: Option<String>,
    pub status: Option<CaseStatus>,
    pub agente_id: Option<AgentId>,
}

impl From<CaseDraft> for CasePatch {
    fn from(draft: CaseDraft) -> Self {
        Self {
            titulo: Some(draft.titulo),
            descricao: Some(draft.descricao),
            status: Some(draft.status),
            agente_id: Some(draft.agente_id),
        }
    }
}

impl Case {
    pub fn new(id: CaseId, draft: CaseDraft) -> Self {
        Self {
            id,
            titulo: draft.titulo,
            descricao: draft.descricao,
            status: draft.status,
            agente_id: draft.agente_id,
        }
    }

    /// Overwrites every field the patch carries. The caller is responsible for
    /// checking a changed `agente_id`.
    pub fn apply(&mut self, patch: CasePatch) {
        if let Some(titulo) = patch.titulo {
            self.titulo = titulo;
        }
        if let Some(descricao) = patch.descricao {
            self.descricao = descricao;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(agente_id) = patch.agente_id {
            self.agente_id = agente_id;
        }
    }
}
