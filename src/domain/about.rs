// About block shown alongside the explorer
use serde::Serialize;

pub const APP_TITLE: &str = "IPMA Weather Alerts Explorer";

#[derive(Debug, Clone, Serialize)]
pub struct AboutSection {
    pub heading: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct About {
    pub title: &'static str,
    pub label: &'static str,
    pub data_source: &'static str,
    pub forecast_horizon_days: u8,
    pub sections: Vec<AboutSection>,
}

impl Default for About {
    fn default() -> Self {
        Self {
            title: APP_TITLE,
            label: "Sobre esta app",
            data_source: "https://api.ipma.pt/",
            forecast_horizon_days: 3,
            sections: vec![
                AboutSection {
                    heading: "O que esta app consegue fazer?",
                    body: "Esta app permite ver os Avisos Meteorológicos através da API do IPMA - https://api.ipma.pt/ - , com previsão até 3 dias.",
                },
                AboutSection {
                    heading: "Como utilizar esta app?",
                    body: "Deverá seleccionar o Aviso Meteorológico que pretende consultar, e automaticamente será elaborado o gráfico de Aviso e Tendência.",
                },
                AboutSection {
                    heading: "Elaboração da app",
                    body: "A aplicação foi desenvolvida por Pedro Gomes e Tiago Cardoso, da Secretaria Geral do Ambiente, utilizando o assistente virtual Cody na elaboração, debugging e simplificação do código, e a API do IPMA numa lógica de utilização de dados abertos de fontes oficiais.",
                },
            ],
        }
    }
}
