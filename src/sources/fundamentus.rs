// src/sources/fundamentus.rs
//! fundamentus.com.br detail page. Year rows of the oscillation table resolve against the
//! current year; the quarterly income rows arrive under their own labels.

use super::SourceSchema;

const LABELS: &[(&str, &str)] = &[
    ("Papel", "fundamentus_papel"),
    ("Tipo", "fundamentus_tipo"),
    ("Empresa", "fundamentus_empresa"),
    ("Setor", "fundamentus_setor"),
    ("Subsetor", "fundamentus_subsetor"),
    ("Data últ cot", "fundamentus_data_ult_cotacao"),
    ("Últ balanço processado", "fundamentus_data_ult_balanco"),
    ("Cotação", "fundamentus_cotacao"),
    ("Min 52 sem", "fundamentus_min_52_semanas"),
    ("Max 52 sem", "fundamentus_max_52_semanas"),
    ("Vol $ méd (2m)", "fundamentus_volume_medio_2m"),
    ("Valor de mercado", "fundamentus_valor_mercado"),
    ("Valor da firma", "fundamentus_valor_firma"),
    ("Nro. Ações", "fundamentus_nro_acoes"),
    ("P/L", "fundamentus_pl"),
    ("P/VP", "fundamentus_pvp"),
    ("PSR", "fundamentus_psr"),
    ("P/Ativos", "fundamentus_p_ativos"),
    ("P/Cap. Giro", "fundamentus_p_cap_giro"),
    ("P/Ativ Circ Liq", "fundamentus_p_ativ_circ_liq"),
    ("EV / EBITDA", "fundamentus_ev_ebitda"),
    ("EV / EBIT", "fundamentus_ev_ebit"),
    ("P/EBIT", "fundamentus_p_ebit"),
    ("Liquidez Corr", "fundamentus_liquidez_corr"),
    ("Div Br/ Patrim", "fundamentus_div_bruta_patrim"),
    ("Giro Ativos", "fundamentus_giro_ativos"),
    ("LPA", "fundamentus_lpa"),
    ("VPA", "fundamentus_vpa"),
    ("Ativo", "fundamentus_ativo"),
    ("Dív. Bruta", "fundamentus_divida_bruta"),
    ("Disponibilidades", "fundamentus_disponibilidades"),
    ("Dív. Líquida", "fundamentus_divida_liquida"),
    ("Ativo Circulante", "fundamentus_ativo_circulante"),
    ("Patrim. Líq", "fundamentus_patrimonio_liquido"),
    ("Receita Líquida", "fundamentus_receita_liquida_12m"),
    ("EBIT", "fundamentus_ebit_12m"),
    ("Lucro Líquido", "fundamentus_lucro_liquido_12m"),
    ("Div. Yield", "fundamentus_dy_percentual"),
    ("Marg. Bruta", "fundamentus_margem_bruta_percentual"),
    ("Marg. EBIT", "fundamentus_margem_ebit_percentual"),
    ("Marg. Líquida", "fundamentus_margem_liquida_percentual"),
    ("EBIT / Ativo", "fundamentus_ebit_ativo_percentual"),
    ("ROIC", "fundamentus_roic_percentual"),
    ("ROE", "fundamentus_roe_percentual"),
    ("Cres. Rec (5a)", "fundamentus_crescimento_rec_5anos_percentual"),
    ("Dia", "fundamentus_oscilacao_dia_percentual"),
    ("Mês", "fundamentus_oscilacao_mes_percentual"),
    ("30 dias", "fundamentus_oscilacao_30d_percentual"),
    ("12 meses", "fundamentus_oscilacao_12m_percentual"),
    ("Receita Líquida (3 meses)", "fundamentus_receita_liquida_3m"),
    ("EBIT (3 meses)", "fundamentus_ebit_3m"),
    ("Lucro Líquido (3 meses)", "fundamentus_lucro_liquido_3m"),
];

const NON_NUMERIC: &[&str] = &[
    "fundamentus_data_ult_balanco",
    "fundamentus_data_ult_cotacao",
    "fundamentus_empresa",
    "fundamentus_papel",
    "fundamentus_setor",
    "fundamentus_subsetor",
    "fundamentus_tipo",
];

pub static SCHEMA: SourceSchema = SourceSchema {
    name: "fundamentus",
    display: "Fundamentus",
    labels: LABELS,
    non_numeric: NON_NUMERIC,
    value_pow10: 0,
    freshness_gated: false,
    case_insensitive_labels: false,
    yearly_oscillation: true,
};
