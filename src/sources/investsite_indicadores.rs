// src/sources/investsite_indicadores.rs
//! investsite.com.br summary indicators table.

use super::SourceSchema;

const LABELS: &[(&str, &str)] = &[
    ("Empresa", "investsiteindicadores_empresa"),
    ("Razão Social", "investsiteindicadores_razao_social"),
    ("Situação Registro", "investsiteindicadores_situacao_registro"),
    ("Situação Emissor", "investsiteindicadores_situacao_emissor"),
    ("Segmento de Listagem", "investsiteindicadores_segmento_de_listagem"),
    ("Atividade", "investsiteindicadores_atividade"),
    ("Ação", "investsiteindicadores_acao"),
    ("Data da Cotação", "investsiteindicadores_data_da_cotacao"),
    ("Tipo de Ação", "investsiteindicadores_tipo_de_acao"),
    ("Fator de Cotação", "investsiteindicadores_fator_de_cotacao"),
    ("Último Demonstrativo Financeiro", "investsiteindicadores_ultimo_demonstrativo_financeiro"),
    ("Setor", "investsiteindicadores_setor"),
    ("Subsetor", "investsiteindicadores_subsetor"),
    ("Segmento", "investsiteindicadores_segmento"),
    ("Participação em Índices", "investsiteindicadores_participacao_em_indices"),
    ("Último Preço de Fechamento", "investsiteindicadores_ultimo_preco_de_fechamento"),
    ("Volume Financeiro Transacionado", "investsiteindicadores_volume_financeiro_transacionado"),
    ("Preço/Lucro", "investsiteindicadores_preco_lucro"),
    ("Preço/VPA", "investsiteindicadores_preco_vpa"),
    ("Preço/Receita Líquida", "investsiteindicadores_preco_receita_liquida"),
    ("Preço/FCO", "investsiteindicadores_preco_fco"),
    ("Preço/FCF", "investsiteindicadores_preco_fcf"),
    ("Preço/Ativo Total", "investsiteindicadores_preco_ativo_total"),
    ("Preço/EBIT", "investsiteindicadores_preco_ebit"),
    ("Preço/Capital Giro", "investsiteindicadores_preco_capital_giro"),
    ("Preço/NCAV", "investsiteindicadores_preco_ncav"),
    ("EV/EBIT", "investsiteindicadores_ev_ebit"),
    ("EV/EBITDA", "investsiteindicadores_ev_ebitda"),
    ("EV/Receita Líquida", "investsiteindicadores_ev_receita_liquida"),
    ("EV/FCO", "investsiteindicadores_ev_fco"),
    ("EV/FCF", "investsiteindicadores_ev_fcf"),
    ("EV/Ativo Total", "investsiteindicadores_ev_ativo_total"),
    ("Market Cap Empresa", "investsiteindicadores_market_cap_empresa"),
    ("Enterprise Value", "investsiteindicadores_enterprise_value"),
    ("Menor Preço 52 semanas", "investsiteindicadores_menor_preco_52_semanas"),
    ("Maior Preço 52 semanas", "investsiteindicadores_maior_preco_52_semanas"),
    ("Volume Diário Médio (3 meses)", "investsiteindicadores_volume_diario_medio_3_meses"),
    ("Giro do Ativo Inicial", "investsiteindicadores_giro_do_ativo_inicial"),
    ("Alavancagem Financeira", "investsiteindicadores_alavancagem_financeira"),
    ("Passivo/Patrimônio Líquido", "investsiteindicadores_passivo_patrimonio_liquido"),
    ("Dívida Líquida/EBITDA", "investsiteindicadores_divida_liquida_ebitda"),
    ("Caixa e Equivalentes de Caixa", "investsiteindicadores_caixa_e_equivalentes_de_caixa"),
    ("Ativo Total", "investsiteindicadores_ativo_total"),
    ("Dívida de Curto Prazo", "investsiteindicadores_divida_de_curto_prazo"),
    ("Dívida de Longo Prazo", "investsiteindicadores_divida_de_longo_prazo"),
    ("Dívida Bruta", "investsiteindicadores_divida_bruta"),
    ("Dívida Líquida", "investsiteindicadores_divida_liquida"),
    ("Patrimônio Líquido", "investsiteindicadores_patrimonio_liquido"),
    ("Valor Patrimonial da Ação", "investsiteindicadores_valor_patrimonial_da_acao"),
    ("Receita Líquida", "investsiteindicadores_receita_liquida"),
    ("Resultado Bruto", "investsiteindicadores_resultado_bruto"),
    ("EBIT", "investsiteindicadores_ebit"),
    ("Depreciação e Amortização", "investsiteindicadores_depreciacao_e_amortizacao"),
    ("EBITDA", "investsiteindicadores_ebitda"),
    ("Lucro Líquido", "investsiteindicadores_lucro_liquido"),
    ("Lucro/Ação", "investsiteindicadores_lucro_por_acao"),
    ("Fluxo de Caixa Operacional", "investsiteindicadores_fluxo_de_caixa_operacional"),
    ("Fluxo de Caixa de Investimentos", "investsiteindicadores_fluxo_de_caixa_de_investimentos"),
    ("Fluxo de Caixa de Financiamentos", "investsiteindicadores_fluxo_de_caixa_de_financiamentos"),
    ("Aumento (Redução) de Caixa e Equivalentes", "investsiteindicadores_aumento_reducao_de_caixa_e_equivalentes"),
    ("CAPEX 3 meses", "investsiteindicadores_capex_3_meses"),
    ("Fluxo de Caixa Livre 3 meses", "investsiteindicadores_fluxo_de_caixa_livre_3_meses"),
    ("CAPEX 12 meses", "investsiteindicadores_capex_12_meses"),
    ("Fluxo de Caixa Livre 12 meses", "investsiteindicadores_fluxo_de_caixa_livre_12_meses"),
    ("Dividend Yield", "investsiteindicadores_dividend_yield_percentual"),
    ("Variação 2025", "investsiteindicadores_variacao_2025_percentual"),
    ("Variação 1 ano", "investsiteindicadores_variacao_1_ano_percentual"),
    ("Variação 2 anos(total)", "investsiteindicadores_variacao_2_anos_total_percentual"),
    ("Variação 2 anos(anual)", "investsiteindicadores_variacao_2_anos_anual_percentual"),
    ("Variação 3 anos(total)", "investsiteindicadores_variacao_3_anos_total_percentual"),
    ("Variação 3 anos(anual)", "investsiteindicadores_variacao_3_anos_anual_percentual"),
    ("Variação 4 anos(total)", "investsiteindicadores_variacao_4_anos_total_percentual"),
    ("Variação 4 anos(anual)", "investsiteindicadores_variacao_4_anos_anual_percentual"),
    ("Variação 5 anos(total)", "investsiteindicadores_variacao_5_anos_total_percentual"),
    ("Variação 5 anos(anual)", "investsiteindicadores_variacao_5_anos_anual_percentual"),
    ("Retorno s/ Capital Tangível Inicial", "investsiteindicadores_retorno_s_capital_tangivel_inicial_percentual"),
    ("Retorno s/ Capital Investido Inicial", "investsiteindicadores_retorno_s_capital_investido_inicial_percentual"),
    ("Retorno s/ Capital Tangível Inicial Pré-Impostos", "investsiteindicadores_retorno_s_capital_tangivel_inicial_pre_impostos_percentual"),
    ("Retorno s/ Capital Investido Inicial Pré-Impostos", "investsiteindicadores_retorno_s_capital_investido_inicial_pre_impostos_percentual"),
    ("Retorno s/ Patrimônio Líquido Inicial", "investsiteindicadores_retorno_s_patrimonio_liquido_inicial_percentual"),
    ("Retorno s/ Ativo Inicial", "investsiteindicadores_retorno_s_ativo_inicial_percentual"),
    ("Margem Bruta", "investsiteindicadores_margem_bruta_percentual"),
    ("Margem Líquida", "investsiteindicadores_margem_liquida_percentual"),
    ("Margem EBIT", "investsiteindicadores_margem_ebit_percentual"),
    ("Margem EBITDA", "investsiteindicadores_margem_ebitda_percentual"),
];

const NON_NUMERIC: &[&str] = &[
    "investsiteindicadores_acao",
    "investsiteindicadores_atividade",
    "investsiteindicadores_data_da_cotacao",
    "investsiteindicadores_empresa",
    "investsiteindicadores_fator_de_cotacao",
    "investsiteindicadores_participacao_em_indices",
    "investsiteindicadores_razao_social",
    "investsiteindicadores_segmento",
    "investsiteindicadores_segmento_de_listagem",
    "investsiteindicadores_setor",
    "investsiteindicadores_situacao_emissor",
    "investsiteindicadores_situacao_registro",
    "investsiteindicadores_subsetor",
    "investsiteindicadores_tipo_de_acao",
    "investsiteindicadores_ultimo_demonstrativo_financeiro",
];

pub static SCHEMA: SourceSchema = SourceSchema {
    name: "investsiteindicadores",
    display: "InvestSite (Indicadores)",
    labels: LABELS,
    non_numeric: NON_NUMERIC,
    value_pow10: 0,
    freshness_gated: false,
    case_insensitive_labels: false,
    yearly_oscillation: false,
};
