//! Contratos entre o painel administrativo e a API da barbearia.
//!
//! Além dos DTOs de transporte, este crate concentra a lógica pura usada
//! pelas telas (máscaras, CSV, linha do tempo do funil, adaptação dos
//! gráficos), para que possa ser testada fora do navegador.

pub mod dashboards;
pub mod domain;
pub mod projections;
pub mod shared;
pub mod system;
