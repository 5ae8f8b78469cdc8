use component_contract::{PropBag, RenderingStrategy};
use leptos::*;

use super::parts;

/// Icon, title, and info on a single row.
pub(super) struct Base;

/// List-view header: breadcrumb label, switchable title, actions, then info and controls.
pub(super) struct ObjectHome;

/// Record header: icon, label, title, actions, then detail blocks.
pub(super) struct RecordHome;

/// Related-list header: trail, title, actions, info and controls, then optional details.
pub(super) struct RelatedList;

pub(super) static BASE: Base = Base;
pub(super) static OBJECT_HOME: ObjectHome = ObjectHome;
pub(super) static RECORD_HOME: RecordHome = RecordHome;
pub(super) static RELATED_LIST: RelatedList = RelatedList;

impl RenderingStrategy for Base {
    fn render(&self, props: &PropBag) -> View {
        view! {
            <div class="ui-page-header__row">
                <div class="ui-page-header__col-title">
                    <div class="ui-media">
                        {parts::figure(props)}
                        <div class="ui-media__body">
                            {parts::title(props)}
                            {parts::info(props)}
                        </div>
                    </div>
                </div>
            </div>
        }
        .into_view()
    }
}

impl RenderingStrategy for ObjectHome {
    fn render(&self, props: &PropBag) -> View {
        view! {
            <div class="ui-page-header__row">
                <div class="ui-page-header__col-title">
                    <div class="ui-media">
                        {parts::figure(props)}
                        <div class="ui-media__body">
                            {parts::label(props)}
                            <div class="ui-page-header__name">
                                {parts::title(props)}
                                {parts::name_switcher(props)}
                            </div>
                        </div>
                    </div>
                </div>
                {parts::actions(props)}
            </div>
            <div class="ui-page-header__row">
                <div class="ui-page-header__col-meta">{parts::info(props)}</div>
                {parts::controls(props)}
            </div>
        }
        .into_view()
    }
}

impl RenderingStrategy for RecordHome {
    fn render(&self, props: &PropBag) -> View {
        view! {
            <div class="ui-page-header__row">
                <div class="ui-page-header__col-title">
                    <div class="ui-media">
                        {parts::figure(props)}
                        <div class="ui-media__body">
                            {parts::label(props)}
                            {parts::title(props)}
                        </div>
                    </div>
                </div>
                {parts::actions(props)}
            </div>
            <div class="ui-page-header__row ui-page-header__row_gutters">
                {parts::details(props)}
            </div>
        }
        .into_view()
    }
}

impl RenderingStrategy for RelatedList {
    fn render(&self, props: &PropBag) -> View {
        view! {
            <div class="ui-page-header__row">
                <div class="ui-page-header__col-title">
                    {parts::label(props)}
                    {parts::title(props)}
                </div>
                {parts::actions(props)}
            </div>
            <div class="ui-page-header__row">
                <div class="ui-page-header__col-meta">{parts::info(props)}</div>
                {parts::controls(props)}
            </div>
            {parts::details(props)}
        }
        .into_view()
    }
}
