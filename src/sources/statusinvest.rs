// src/sources/statusinvest.rs
//! statusinvest.com.br. Fetched through rotating API credentials, so the group is
//! freshness-gated: a recent refresh is reused instead of spending quota.

use super::SourceSchema;

const LABELS: &[(&str, &str)] = &[
    ("Valor atual", "statusInvest_cotacao"),
    ("Min. 52 semanas", "statusInvest_min_52_semanas"),
    ("Máx. 52 semanas", "statusInvest_max_52_semanas"),
    ("Dividend Yield", "statusInvest_dy_percentual"),
    ("Valorização (12m)", "statusInvest_valorizacao_12m_percentual"),
    ("P/L", "statusInvest_pl"),
    ("PEG Ratio", "statusInvest_peg_ratio"),
    ("P/VP", "statusInvest_pvp"),
    ("EV/EBITDA", "statusInvest_ev_ebitda"),
    ("EV/EBIT", "statusInvest_ev_ebit"),
    ("P/EBITDA", "statusInvest_p_ebitda"),
    ("P/EBIT", "statusInvest_p_ebit"),
    ("VPA", "statusInvest_vpa"),
    ("P/Ativo", "statusInvest_p_ativo"),
    ("LPA", "statusInvest_lpa"),
    ("P/SR", "statusInvest_psr"),
    ("P/Cap. Giro", "statusInvest_p_cap_giro"),
    ("P/Ativo Circ. Liq.", "statusInvest_p_ativo_circ_liq"),
    ("Dív. líquida/PL", "statusInvest_divida_liquida_pl"),
    ("Dív. líquida/EBITDA", "statusInvest_divida_liquida_ebitda"),
    ("Dív. líquida/EBIT", "statusInvest_divida_liquida_ebit"),
    ("PL/Ativos", "statusInvest_pl_ativos"),
    ("Passivos/Ativos", "statusInvest_passivos_ativos"),
    ("Liq. corrente", "statusInvest_liquidez_corrente"),
    ("M. Bruta", "statusInvest_margem_bruta_percentual"),
    ("M. EBITDA", "statusInvest_margem_ebitda_percentual"),
    ("M. EBIT", "statusInvest_margem_ebit_percentual"),
    ("M. Líquida", "statusInvest_margem_liquida_percentual"),
    ("ROE", "statusInvest_roe_percentual"),
    ("ROA", "statusInvest_roa_percentual"),
    ("ROIC", "statusInvest_roic_percentual"),
    ("Giro ativos", "statusInvest_giro_ativos"),
    ("CAGR Receitas 5 anos", "statusInvest_cagr_receitas_5anos_percentual"),
    ("CAGR Lucros 5 anos", "statusInvest_cagr_lucros_5anos_percentual"),
    ("Liquidez média diária", "statusInvest_liquidez_media_diaria"),
    ("Valor de mercado", "statusInvest_valor_mercado"),
    ("Valor de firma", "statusInvest_valor_firma"),
    ("Patrimônio líquido", "statusInvest_patrimonio_liquido"),
    ("Nº total de papéis", "statusInvest_nro_total_papeis"),
    ("Ativos", "statusInvest_ativos"),
    ("Ativo circulante", "statusInvest_ativo_circulante"),
    ("Dívida bruta", "statusInvest_divida_bruta"),
    ("Dívida líquida", "statusInvest_divida_liquida"),
    ("Disponibilidade", "statusInvest_disponibilidade"),
    ("Free float", "statusInvest_free_float_percentual"),
    ("Tag Along", "statusInvest_tag_along_percentual"),
    ("Segmento de listagem", "statusInvest_segmento_listagem"),
    ("Setor de Atuação", "statusInvest_setor"),
    ("Subsetor de Atuação", "statusInvest_subsetor"),
    ("Segmento de Atuação", "statusInvest_segmento"),
];

const NON_NUMERIC: &[&str] = &[
    "statusInvest_segmento_listagem",
    "statusInvest_setor",
    "statusInvest_subsetor",
    "statusInvest_segmento",
];

pub static SCHEMA: SourceSchema = SourceSchema {
    name: "statusInvest",
    display: "Status Invest",
    labels: LABELS,
    non_numeric: NON_NUMERIC,
    value_pow10: 0,
    freshness_gated: true,
    case_insensitive_labels: false,
    yearly_oscillation: false,
};
