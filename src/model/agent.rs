use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Store-assigned identifier for Agents. Serialized as a bare number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentId(pub u64);

impl From<u64> for AgentId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An agent's position in the department.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentRole {
    Investigador,
    Delegada,
    Escrivao,
}

impl FromStr for AgentRole {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "investigador" => Ok(Self::Investigador),
            "delegada" => Ok(Self::Delegada),
            "escrivao" => Ok(Self::Escrivao),
            _ => Err(()),
        }
    }
}

/// A personnel record that Cases point at.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Agent {
    pub id: AgentId,
    pub nome: String,
    #[serde(rename = "dataDeIncorporacao")]
    pub data_de_incorporacao: NaiveDate,
    pub cargo: AgentRole,
}

/// A fully validated Agent payload (create or full replace).
#[derive(Debug, Clone, PartialEq)]
pub struct AgentDraft {
    pub nome: String,
    pub data_de_incorporacao: NaiveDate,
    pub cargo: AgentRole,
}

/// A validated partial change. `None` fields are left as stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AgentPatch {
    pub nome: Option<String>,
    pub data_de_incorporacao: Option<NaiveDate>,
    pub cargo: Option<AgentRole>,
}

impl From<AgentDraft> for AgentPatch {
    fn from(draft: AgentDraft) -> Self {
        Self {
            nome: Some(draft.nome),
            data_de_incorporacao: Some(draft.data_de_incorporacao),
            cargo: Some(draft.cargo),
        }
    }
}

impl Agent {
    pub fn new(id: AgentId, draft: AgentDraft) -> Self {
        Self {
            id,
            nome: draft.nome,
            data_de_incorporacao: draft.data_de_incorporacao,
            cargo: draft.cargo,
        }
    }

    /// Overwrites every field the patch carries.
    pub fn apply(&mut self, patch: AgentPatch) {
        if let Some(nome) = patch.nome {
            self.nome = nome;
        }
        if let Some(data) = patch.data_de_incorporacao {
            self.data_de_incorporacao = data;
        }
        if let Some(cargo) = patch.cargo {
            self.cargo = cargo;
        }
    }
}
