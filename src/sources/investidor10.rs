// src/sources/investidor10.rs
//! investidor10.com.br: price card, indicator grid and the "about the company" tables.

use super::SourceSchema;

const LABELS: &[(&str, &str)] = &[
    ("COTAÇÃO", "investidor10_cotacao"),
    ("VARIAÇÃO (12M)", "investidor10_variacao_12m_percentual"),
    ("P/L", "investidor10_pl"),
    ("P/VP", "investidor10_pvp"),
    ("P/RECEITA (PSR)", "investidor10_psr"),
    ("EV/EBITDA", "investidor10_ev_ebitda"),
    ("EV/EBIT", "investidor10_ev_ebit"),
    ("P/EBITDA", "investidor10_p_ebitda"),
    ("P/EBIT", "investidor10_p_ebit"),
    ("VPA", "investidor10_vpa"),
    ("LPA", "investidor10_lpa"),
    ("DÍVIDA LÍQUIDA / PATRIMÔNIO", "investidor10_divida_liquida_patrimonio"),
    ("DÍVIDA LÍQUIDA / EBITDA", "investidor10_divida_liquida_ebitda"),
    ("DÍVIDA LÍQUIDA / EBIT", "investidor10_divida_liquida_ebit"),
    ("LIQUIDEZ CORRENTE", "investidor10_liquidez_corrente"),
    ("PATRIMÔNIO / ATIVOS", "investidor10_patrimonio_ativos"),
    ("PASSIVOS / ATIVOS", "investidor10_passivos_ativos"),
    ("GIRO ATIVOS", "investidor10_giro_ativos"),
    ("VALOR DE MERCADO", "investidor10_valor_mercado"),
    ("VALOR DE FIRMA", "investidor10_valor_firma"),
    ("PATRIMÔNIO LÍQUIDO", "investidor10_patrimonio_liquido"),
    ("Nº TOTAL DE PAPEIS", "investidor10_nro_total_papeis"),
    ("ATIVOS", "investidor10_ativos"),
    ("ATIVO CIRCULANTE", "investidor10_ativo_circulante"),
    ("DÍVIDA BRUTA", "investidor10_divida_bruta"),
    ("DÍVIDA LÍQUIDA", "investidor10_divida_liquida"),
    ("DISPONIBILIDADE", "investidor10_disponibilidade"),
    ("LIQUIDEZ MÉDIA DIÁRIA", "investidor10_liquidez_media_diaria"),
    ("NÚMERO DE FUNCIONÁRIOS", "investidor10_nro_funcionarios"),
    ("DIVIDEND YIELD", "investidor10_dy_percentual"),
    ("PAYOUT", "investidor10_payout_percentual"),
    ("MARGEM LÍQUIDA", "investidor10_margem_liquida_percentual"),
    ("MARGEM BRUTA", "investidor10_margem_bruta_percentual"),
    ("MARGEM EBIT", "investidor10_margem_ebit_percentual"),
    ("MARGEM EBITDA", "investidor10_margem_ebitda_percentual"),
    ("ROE", "investidor10_roe_percentual"),
    ("ROIC", "investidor10_roic_percentual"),
    ("ROA", "investidor10_roa_percentual"),
    ("CAGR RECEITAS 5 ANOS", "investidor10_cagr_receitas_5anos_percentual"),
    ("CAGR LUCROS 5 ANOS", "investidor10_cagr_lucros_5anos_percentual"),
    ("FREE FLOAT", "investidor10_free_float_percentual"),
    ("TAG ALONG", "investidor10_tag_along_percentual"),
    ("SEGMENTO DE LISTAGEM", "investidor10_segmento_listagem"),
    ("SETOR", "investidor10_setor"),
    ("SEGMENTO", "investidor10_segmento"),
    ("NOME DA EMPRESA", "investidor10_nome_empresa"),
    ("CNPJ", "investidor10_cnpj"),
    ("ANO DE ESTREIA NA BOLSA", "investidor10_ano_estreia_bolsa"),
    ("ANO DE FUNDAÇÃO", "investidor10_ano_fundacao"),
];

const NON_NUMERIC: &[&str] = &[
    "investidor10_ano_estreia_bolsa",
    "investidor10_ano_fundacao",
    "investidor10_cnpj",
    "investidor10_nome_empresa",
    "investidor10_segmento",
    "investidor10_segmento_listagem",
    "investidor10_setor",
];

pub static SCHEMA: SourceSchema = SourceSchema {
    name: "investidor10",
    display: "Investidor10",
    labels: LABELS,
    non_numeric: NON_NUMERIC,
    value_pow10: 0,
    freshness_gated: false,
    case_insensitive_labels: true,
    yearly_oscillation: false,
};
