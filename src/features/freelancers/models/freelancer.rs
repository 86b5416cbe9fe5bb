use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

/// Database model for a freelancer profile
#[derive(Debug, Clone, FromRow)]
pub struct Freelancer {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub age: i32,
    pub gender: Option<String>,
    pub region: String,
    pub experiences: String,
    pub portfolio_url: Option<String>,
    pub daily_rate: Option<Decimal>,
    pub availability: Option<String>,
    pub photo_url: Option<String>,
    pub approved: bool,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Freelancer {
    /// Skill tags from the comma-delimited experience text
    pub fn skills(&self) -> Vec<String> {
        self.experiences
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn review_state(&self) -> ReviewState {
        match (self.approved, self.reviewed_at) {
            (true, _) => ReviewState::Approved,
            (false, None) => ReviewState::Pending,
            (false, Some(_)) => ReviewState::Rejected,
        }
    }
}

/// Validated profile data ready to insert
#[derive(Debug, Clone, PartialEq)]
pub struct NewFreelancer {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub age: i32,
    pub gender: Option<Gender>,
    pub region: Region,
    pub experiences: String,
    pub portfolio_url: Option<String>,
    pub daily_rate: Option<Decimal>,
    pub availability: Option<Availability>,
    pub photo_url: Option<String>,
}

/// Where a profile sits in the admin review flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReviewState {
    Pending,
    Approved,
    Rejected,
}

/// Cities a freelancer can register for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Region {
    #[serde(rename = "São Paulo")]
    SaoPaulo,
    #[serde(rename = "Rio de Janeiro")]
    RioDeJaneiro,
    #[serde(rename = "Belo Horizonte")]
    BeloHorizonte,
    #[serde(rename = "Brasília")]
    Brasilia,
    #[serde(rename = "Salvador")]
    Salvador,
    #[serde(rename = "Recife")]
    Recife,
    #[serde(rename = "Porto Alegre")]
    PortoAlegre,
    #[serde(rename = "Curitiba")]
    Curitiba,
    #[serde(rename = "Fortaleza")]
    Fortaleza,
    #[serde(rename = "Manaus")]
    Manaus,
    #[serde(rename = "Goiânia")]
    Goiania,
    #[serde(rename = "Campo Grande")]
    CampoGrande,
}

impl Region {
    pub const ALL: [Region; 12] = [
        Region::SaoPaulo,
        Region::RioDeJaneiro,
        Region::BeloHorizonte,
        Region::Brasilia,
        Region::Salvador,
        Region::Recife,
        Region::PortoAlegre,
        Region::Curitiba,
        Region::Fortaleza,
        Region::Manaus,
        Region::Goiania,
        Region::CampoGrande,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::SaoPaulo => "São Paulo",
            Region::RioDeJaneiro => "Rio de Janeiro",
            Region::BeloHorizonte => "Belo Horizonte",
            Region::Brasilia => "Brasília",
            Region::Salvador => "Salvador",
            Region::Recife => "Recife",
            Region::PortoAlegre => "Porto Alegre",
            Region::Curitiba => "Curitiba",
            Region::Fortaleza => "Fortaleza",
            Region::Manaus => "Manaus",
            Region::Goiania => "Goiânia",
            Region::CampoGrande => "Campo Grande",
        }
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| format!("Unknown region: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Gender {
    #[serde(rename = "Masculino")]
    Male,
    #[serde(rename = "Feminino")]
    Female,
    #[serde(rename = "Outro")]
    Other,
    #[serde(rename = "Prefiro não informar")]
    Undisclosed,
}

impl Gender {
    pub const ALL: [Gender; 4] = [
        Gender::Male,
        Gender::Female,
        Gender::Other,
        Gender::Undisclosed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Masculino",
            Gender::Female => "Feminino",
            Gender::Other => "Outro",
            Gender::Undisclosed => "Prefiro não informar",
        }
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gender::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| format!("Unknown gender: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Fulltime,
    Parttime,
    Weekend,
    Flexible,
}

impl Availability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::Fulltime => "fulltime",
            Availability::Parttime => "parttime",
            Availability::Weekend => "weekend",
            Availability::Flexible => "flexible",
        }
    }
}

impl FromStr for Availability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fulltime" => Ok(Availability::Fulltime),
            "parttime" => Ok(Availability::Parttime),
            "weekend" => Ok(Availability::Weekend),
            "flexible" => Ok(Availability::Flexible),
            other => Err(format!("Unknown availability: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_round_trips_display_names() {
        for region in Region::ALL {
            assert_eq!(region.as_str().parse::<Region>(), Ok(region));
        }
        assert!("Rio".parse::<Region>().is_err());
        assert!("são paulo".parse::<Region>().is_err());
    }

    #[test]
    fn test_gender_and_availability_parse() {
        assert_eq!("Prefiro não informar".parse::<Gender>(), Ok(Gender::Undisclosed));
        assert!("Unknown".parse::<Gender>().is_err());
        assert_eq!("weekend".parse::<Availability>(), Ok(Availability::Weekend));
        assert!("Weekend".parse::<Availability>().is_err());
    }
}
