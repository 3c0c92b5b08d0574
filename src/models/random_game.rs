use enclose::enclose;
use futures::FutureExt;
use http::Request;
use serde::Serialize;

use crate::constants::{CATALOG_API_URL, CATALOG_STORAGE_KEY};
use crate::deep_links::GameDeepLinks;
use crate::models::common::{eq_update, Loadable};
use crate::models::ctx::{Ctx, CtxError, OtherError};
use crate::runtime::msg::{Action, ActionRandomGame, Event, Internal, Msg};
use crate::runtime::{Effect, EffectFuture, Effects, Env, EnvFutureExt, UpdateWithCtx};
use crate::types::games::{CatalogResponse, GamePreview};
use crate::types::locale::Locale;

/// The "random game" affordance: resolves a navigable link to a randomly
/// picked game. The catalog comes from the storage cache when possible and
/// from the catalog API otherwise; a fetched catalog is cached back.
#[derive(Default, Clone, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RandomGame {
    pub catalog: Option<Loadable<Vec<GamePreview>, CtxError>>,
    pub picked: Option<GameDeepLinks>,
}

impl<E: Env + 'static> UpdateWithCtx<E> for RandomGame {
    fn update(&mut self, msg: &Msg, ctx: &Ctx) -> Effects {
        match msg {
            Msg::Action(Action::RandomGame(ActionRandomGame::Open)) => {
                // Reentrant opens while the catalog is loading are ignored.
                if matches!(&self.catalog, Some(loadable) if loadable.is_loading()) {
                    return Effects::none().unchanged();
                };
                let catalog_effects = eq_update(&mut self.catalog, Some(Loadable::Loading));
                let picked_effects = eq_update(&mut self.picked, None);
                Effects::one(pull_catalog_from_storage::<E>())
                    .unchanged()
                    .join(catalog_effects)
                    .join(picked_effects)
            }
            Msg::Action(Action::Unload) => {
                let catalog_effects = eq_update(&mut self.catalog, None);
                let picked_effects = eq_update(&mut self.picked, None);
                catalog_effects.join(picked_effects)
            }
            Msg::Internal(Internal::CatalogStorageResult(result))
                if matches!(&self.catalog, Some(loadable) if loadable.is_loading()) =>
            {
                match result {
                    Ok(Some(games)) if !games.is_empty() => {
                        self.pick::<E>(games.to_owned(), ctx)
                    }
                    // No usable cache, ask the API.
                    Ok(_) => Effects::one(fetch_catalog::<E>(ctx.locale)).unchanged(),
                    // A corrupt cache is dropped so it is not parsed again.
                    Err(_) => Effects::one(refresh_catalog::<E>(ctx.locale)).unchanged(),
                }
            }
            Msg::Internal(Internal::CatalogAPIResult(locale, result))
                if *locale == ctx.locale
                    && matches!(&self.catalog, Some(loadable) if loadable.is_loading()) =>
            {
                match result {
                    Ok(games) if !games.is_empty() => {
                        Effects::one(push_catalog_to_storage::<E>(games))
                            .unchanged()
                            .join(
                                Effects::msg(Msg::Event(Event::CatalogFetched {
                                    locale: *locale,
                                }))
                                .unchanged(),
                            )
                            .join(self.pick::<E>(games.to_owned(), ctx))
                    }
                    Ok(_) => {
                        let error = CtxError::from(OtherError::EmptyCatalog);
                        self.fail(error, *locale)
                    }
                    Err(error) => {
                        let error = CtxError::from(error.to_owned());
                        self.fail(error, *locale)
                    }
                }
            }
            _ => Effects::none().unchanged(),
        }
    }
}

impl RandomGame {
    fn pick<E: Env + 'static>(&mut self, games: Vec<GamePreview>, ctx: &Ctx) -> Effects {
        let index = E::now().timestamp_millis().unsigned_abs() as usize % games.len();
        let id = games[index].id;
        let deep_links = GameDeepLinks::from((&games[index], &ctx.locale));
        let catalog_effects = eq_update(&mut self.catalog, Some(Loadable::Ready(games)));
        let picked_effects = eq_update(&mut self.picked, Some(deep_links));
        catalog_effects
            .join(picked_effects)
            .join(Effects::msg(Msg::Event(Event::RandomGamePicked { id })).unchanged())
    }
    /// The loading state is always resolved, also on failure, so the shell
    /// never keeps spinning; no link is picked and no navigation happens.
    fn fail(&mut self, error: CtxError, locale: Locale) -> Effects {
        let catalog_effects =
            eq_update(&mut self.catalog, Some(Loadable::Err(error.to_owned())));
        catalog_effects.join(
            Effects::msg(Msg::Event(Event::Error {
                error,
                source: Box::new(Event::CatalogFetched { locale }),
            }))
            .unchanged(),
        )
    }
}

fn catalog_request(locale: Locale) -> Request<()> {
    let mut url = CATALOG_API_URL.to_owned();
    url.query_pairs_mut().append_pair("locale", locale.as_ref());
    Request::get(url.as_str())
        .body(())
        .expect("request builder failed")
}

fn pull_catalog_from_storage<E: Env + 'static>() -> Effect {
    EffectFuture::Sequential(
        E::get_storage::<Vec<GamePreview>>(CATALOG_STORAGE_KEY)
            .map(|result| Msg::Internal(Internal::CatalogStorageResult(result)))
            .boxed_env(),
    )
    .into()
}

fn push_catalog_to_storage<E: Env + 'static>(games: &[GamePreview]) -> Effect {
    EffectFuture::Sequential(
        E::set_storage(CATALOG_STORAGE_KEY, Some(&games.to_vec()))
            .map(|result| match result {
                Ok(_) => Msg::Event(Event::CatalogPushedToStorage),
                Err(error) => Msg::Event(Event::Error {
                    error: CtxError::from(error),
                    source: Box::new(Event::CatalogPushedToStorage),
                }),
            })
            .boxed_env(),
    )
    .into()
}

fn fetch_catalog<E: Env + 'static>(locale: Locale) -> Effect {
    EffectFuture::Concurrent(
        E::fetch::<_, CatalogResponse>(catalog_request(locale))
            .map(enclose!((locale) move |result| {
                Msg::Internal(Internal::CatalogAPIResult(
                    locale,
                    result.map(|response| response.games),
                ))
            }))
            .boxed_env(),
    )
    .into()
}

fn refresh_catalog<E: Env + 'static>(locale: Locale) -> Effect {
    EffectFuture::Concurrent(
        E::set_storage::<Vec<GamePreview>>(CATALOG_STORAGE_KEY, None)
            .then(move |_| E::fetch::<_, CatalogResponse>(catalog_request(locale)))
            .map(enclose!((locale) move |result| {
                Msg::Internal(Internal::CatalogAPIResult(
                    locale,
                    result.map(|response| response.games),
                ))
            }))
            .boxed_env(),
    )
    .into()
}
